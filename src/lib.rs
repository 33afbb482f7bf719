//! Multistart tabu search engine for unconstrained binary quadratic
//! optimization (QUBO).
//!
//! Given a symmetric matrix `Q` of order `N` and the objective
//! `E(x) = x^T Q x` over `x in {0,1}^N`, [`tabu::search`] returns a
//! low-energy assignment within a caller-supplied wall-clock budget.
//!
//! # Architecture
//!
//! The crate is a single algorithm family, laid out the way each
//! algorithm family in this codebase is laid out: `config.rs` for
//! builder-style hyperparameters, data-model modules for the core
//! types ([`tabu::qubo`], [`tabu::state`], [`tabu::tabu_list`]), and
//! runner modules for the execution loops ([`tabu::sts`] for a single
//! descent, [`tabu::mst2`] for the multistart controller).
//! [`tabu::facade`] (re-exported as [`tabu::search`]) is the only
//! entry point an external collaborator needs.
//!
//! # Usage
//!
//! ```
//! use qubo_tabu::tabu::{search, SearchConfig};
//!
//! let q = vec![vec![2.0, 1.0, 1.0], vec![1.0, 2.0, 1.0], vec![1.0, 1.0, 2.0]];
//! let x0 = vec![1, 1, 1];
//! let config = SearchConfig::default()
//!     .with_tenure(2)
//!     .with_timeout_ms(20);
//!
//! let result = search(&q, &x0, &config).unwrap();
//! assert_eq!(result.best_assignment, vec![0, 0, 0]);
//! ```

pub mod tabu;
