//! Contagion processes run over any [`Adjacency`](crate::db::adjacency::Adjacency).

pub mod linear_threshold;
