use clap::{Parser, Subcommand};

#[derive(clap::Args, Debug)]
pub struct SmoothArgs {
    /// Mesh to smooth (.obj or binary .stl).
    pub input: String,

    /// Output path for the smoothed OBJ file.
    #[arg(short, long)]
    pub output: String,

    /// Number of smoothing iterations.
    #[arg(short, long)]
    pub iterations: Option<usize>,
}

#[derive(clap::Args, Debug)]
pub struct InfoArgs {
    /// Mesh to describe (.obj or binary .stl).
    pub input: String,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Apply Laplacian smoothing and write the result as OBJ.
    Smooth(SmoothArgs),
    /// Print vertex, triangle and connectivity counts.
    Info(InfoArgs),
}
