use std::process::ExitCode;

use clap::Parser;
use console::style;

use desktop_starter::logging;
use desktop_starter::slicegen::{next_steps, Artifact, SliceGenerator, SliceRequest, USAGE};

const SLICE_FILTER: &str = "warn,desktop_starter=info";

#[derive(Parser, Debug)]
#[command(name = "create-slice")]
#[command(about = "Scaffold a vertical slice under src/slices")]
struct Cli {
    /// Project directory containing `src/`.
    #[arg(long, default_value = ".")]
    root: String,

    /// Slice name followed by one or more use cases.
    args: Vec<String>,
}

fn print_usage() {
    println!("\nUsage: {USAGE}");
    println!("\nExamples:");
    println!("  create-slice users list create update delete");
    println!("  create-slice products list create update delete view");
}

fn main() -> ExitCode {
    logging::init(SLICE_FILTER);
    let cli = Cli::parse();

    let request = match SliceRequest::from_args(&cli.args) {
        Ok(request) => request,
        Err(err) => {
            eprintln!("{} {}", style("❌ Error:").red().bold(), inner_message(&err));
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    let use_cases: Vec<&str> = request.use_cases.iter().map(|uc| uc.as_str()).collect();
    println!("\n🚀 Creating vertical slice: {}", style(&request.name).bold());
    println!("📋 Use cases: {}\n", use_cases.join(", "));

    let slice = match SliceGenerator::new(&cli.root).generate(&request) {
        Ok(slice) => slice,
        Err(err) => {
            eprintln!("{} {err}", style("❌ Error:").red().bold());
            return ExitCode::FAILURE;
        }
    };

    let hooks = slice.count(|a| matches!(a, Artifact::Hook(_)));
    println!("✅ Created directories in {}", slice.slice_dir.display());
    println!("✅ Created shared types and database functions");
    println!("✅ Created {hooks} use case hooks and components");
    println!("✅ Created mod.rs and config.rs");
    println!("✅ Created route file {}", slice.route_file.display());

    println!(
        "\n✨ Slice {} created successfully!\n",
        style(format!("\"{}\"", request.name)).green().bold()
    );
    println!("📝 Next steps:");
    for (idx, step) in next_steps(&request).iter().enumerate() {
        println!("   {}. {step}", idx + 1);
    }
    println!();
    ExitCode::SUCCESS
}

fn inner_message(err: &desktop_starter::StarterError) -> String {
    match err {
        desktop_starter::StarterError::Validation(message) => message.clone(),
        other => other.to_string(),
    }
}
