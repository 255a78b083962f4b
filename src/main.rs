use clap::Parser;
use rhythm_analyzer::analysis::RealAnalyzer;
use rhythm_analyzer::{AnalysisConfig, AnalysisPipeline};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "rhythm-analyzer")]
#[command(about = "Analyze an audio file for tempo, beat timings and intense moments", long_about = None)]
struct Args {
    /// Path to the audio file to be analyzed
    #[arg(long)]
    audio: PathBuf,

    /// Path to the output JSON file
    #[arg(long)]
    output: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Progress messages go through the logger so tests can silence them
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AnalysisConfig::new(args.audio, args.output);
    let pipeline = AnalysisPipeline::new(config, RealAnalyzer::new());

    match pipeline.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            println!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
