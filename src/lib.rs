/// Account state and balance management. Handling a command yields an
/// event, and events are the only thing that mutates a balance.
pub mod account;

/// Validated commands that later are executed by [`account`] and
/// coordinated by [`processor`]. Every monetary amount is rounded to two
/// decimals on the way in.
pub mod command;

/// Seedable synthetic data generation for the simulation driver.
pub mod generator;

/// Transaction processor interface, plus "in memory" implementation.
/// Coordinates account opening, transactions and transfers, and is the
/// seam where a persistent implementation could be swapped in.
pub mod processor;

/// Ideally this would live in its own crate that bootstraps the core
/// logic, but the integration tests reuse it, so it stays here.
pub mod bin_utils;
