// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.

use clap::Args;

use super::OutputFormat;

/// Where the reported problem is.
#[derive(Args, Clone, Debug, Default)]
pub struct LocationArgs {
    /// Latitude of the problem
    #[arg(long, allow_negative_numbers = true, requires = "lng")]
    pub lat: Option<f64>,

    /// Longitude of the problem
    #[arg(long, allow_negative_numbers = true, requires = "lat")]
    pub lng: Option<f64>,

    /// Street address or landmark
    #[arg(long, alias = "location")]
    pub address: Option<String>,

    /// Floor within the building
    #[arg(long)]
    pub floor: Option<String>,

    /// Sector, wing or block
    #[arg(long)]
    pub sector: Option<String>,
}

/// Output format selection.
#[derive(Args, Clone, Copy, Debug, Default)]
pub struct OutputArgs {
    /// Output format
    #[arg(long, short, value_enum, default_value_t)]
    pub output: OutputFormat,
}
