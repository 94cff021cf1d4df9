use clap::{Args as ClapArgs, Parser, Subcommand};
use netscope::graph_loader::edge_list::load_edge_list;
use netscope_cli::{
    commands::{self, CentralityKind, CliError},
    config::app_config::{load_config, AppConfig, AppConfigBuilder},
};
use netscope_api::core::utils::logging::init_global_logger_with_writer;
use std::{io, path::PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "netscope",
    about = "Structural metrics, centrality and diffusion for directed graphs"
)]
struct Args {
    /// TOML, YAML or JSON file layered over the built-in defaults
    #[arg(long, env = "NETSCOPE_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[arg(long, env = "NETSCOPE_LOG_LEVEL", global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(ClapArgs, Debug)]
struct CentralityArgs {
    #[arg(long, short = 'c', env = "NETSCOPE_CENTRALITY", value_enum, default_value_t = CentralityKind::Betweenness)]
    centrality: CentralityKind,

    /// Katz attenuation factor
    #[arg(long, env = "NETSCOPE_KATZ_ALPHA")]
    alpha: Option<f64>,

    /// Stopping tolerance for eigenvector and Katz centrality
    #[arg(long, env = "NETSCOPE_CONFIDENCE")]
    confidence: Option<f64>,

    #[arg(long, env = "NETSCOPE_MAX_ITERATIONS")]
    max_iterations: Option<usize>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Print structural metrics of an edge-list graph")]
    Summary { file: PathBuf },

    #[command(about = "Print the most central vertices")]
    Top {
        file: PathBuf,

        #[arg(short = 'k', long = "top-k", env = "NETSCOPE_TOP_K")]
        k: Option<usize>,

        #[command(flatten)]
        centrality: CentralityArgs,
    },

    #[command(about = "Run linear threshold diffusion seeded with the most central vertices")]
    Diffuse {
        file: PathBuf,

        #[arg(long, env = "NETSCOPE_SEED_TOP")]
        seed_top: Option<usize>,

        #[arg(long, env = "NETSCOPE_RNG_SEED")]
        rng_seed: Option<u64>,

        #[command(flatten)]
        centrality: CentralityArgs,
    },
}

impl CentralityArgs {
    fn apply(&self, mut builder: AppConfigBuilder) -> AppConfigBuilder {
        if let Some(alpha) = self.alpha {
            builder = builder.with_katz_alpha(alpha);
        }
        if let Some(confidence) = self.confidence {
            builder = builder.with_confidence(confidence);
        }
        if let Some(max_iterations) = self.max_iterations {
            builder = builder.with_max_iterations(max_iterations);
        }
        builder
    }
}

fn resolve_config(args: &Args) -> Result<AppConfig, CliError> {
    let mut builder: AppConfigBuilder = load_config(None, args.config.clone())?.into();
    if let Some(log_level) = &args.log_level {
        builder = builder.with_log_level(log_level.clone());
    }
    builder = match &args.command {
        Commands::Summary { .. } => builder,
        Commands::Top { k, centrality, .. } => {
            let builder = centrality.apply(builder);
            match k {
                Some(k) => builder.with_top_k(*k),
                None => builder,
            }
        }
        Commands::Diffuse {
            seed_top,
            rng_seed,
            centrality,
            ..
        } => {
            let mut builder = centrality.apply(builder);
            if let Some(seed_top) = seed_top {
                builder = builder.with_top_k(*seed_top);
            }
            if rng_seed.is_some() {
                builder = builder.with_diffusion_seed(*rng_seed);
            }
            builder
        }
    };
    Ok(builder.build())
}

/// Logs go to stderr so reports on stdout stay machine-readable.
fn init_logging(config: &AppConfig) {
    init_global_logger_with_writer(config.logging.log_level.clone(), io::stderr);
}

pub(crate) fn cli() -> Result<(), CliError> {
    let args = Args::parse();
    let config = resolve_config(&args)?;
    init_logging(&config);

    let analysis = &config.analysis;
    let mut out = io::stdout().lock();
    match args.command {
        Commands::Summary { file } => {
            let graph = load_edge_list(file)?;
            commands::summary(&graph, &mut out)
        }
        Commands::Top {
            file, centrality, ..
        } => {
            let graph = load_edge_list(file)?;
            let centrality = centrality.centrality.with_params(analysis);
            commands::top(&graph, analysis.top_k, centrality, &mut out)
        }
        Commands::Diffuse {
            file, centrality, ..
        } => {
            let graph = load_edge_list(file)?;
            let centrality = centrality.centrality.with_params(analysis);
            commands::diffuse(
                &graph,
                analysis.top_k,
                centrality,
                analysis.diffusion_seed,
                &mut out,
            )
        }
    }
}
