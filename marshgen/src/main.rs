//! marshgen CLI - Marshaller source generator
//!
//! Commands:
//! - `marshgen generate` - Generate marshaller sources from schemas
//! - `marshgen check` - Aggregate schemas and report generation failures

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use marshgen::{
    AggregatorConfig, GenerationReport, Generator, GeneratorConfig, SchemaAggregator,
    SchemaSource, write_artifacts,
};

#[derive(Parser)]
#[command(name = "marshgen")]
#[command(author, version, about = "Schema-driven marshaller generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct SchemaArgs {
    /// Schema files to aggregate, in registration order
    schemas: Vec<PathBuf>,

    /// Named schema resources, looked up under the resource roots
    #[arg(short, long = "resource")]
    resources: Vec<String>,

    /// Directory searched for named resources (repeatable)
    #[arg(short = 'I', long = "resource-root")]
    resource_roots: Vec<PathBuf>,

    /// Option name overriding a schema package for target classes
    #[arg(long, default_value = marshgen::codegen::config::DEFAULT_PACKAGE_OPTION)]
    package_option: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate marshaller sources
    Generate {
        #[command(flatten)]
        schema: SchemaArgs,

        /// Output directory for generated sources
        #[arg(short, long)]
        output: PathBuf,

        /// Package of the runtime marshaller contract
        #[arg(long, default_value = marshgen::codegen::config::DEFAULT_RUNTIME_PACKAGE)]
        runtime_package: String,

        /// Fail without writing anything if any type cannot be generated
        #[arg(long)]
        strict: bool,
    },

    /// Aggregate schemas and report generation failures
    Check {
        #[command(flatten)]
        schema: SchemaArgs,
    },
}

impl SchemaArgs {
    fn generate(&self, config: GeneratorConfig) -> anyhow::Result<GenerationReport> {
        if self.schemas.is_empty() && self.resources.is_empty() {
            bail!("no schema sources given");
        }

        let aggregator_config = self
            .resource_roots
            .iter()
            .fold(AggregatorConfig::new(), |config, root| {
                config.resource_root(root.clone())
            });
        let sources = self
            .schemas
            .iter()
            .cloned()
            .map(SchemaSource::file)
            .chain(self.resources.iter().cloned().map(SchemaSource::resource));

        let table = SchemaAggregator::new(aggregator_config)
            .sources(sources)
            .aggregate()
            .context("failed to aggregate schemas")?;

        Ok(Generator::new(&table, config).generate())
    }
}

fn report_failures(report: &GenerationReport) {
    for failure in &report.failures {
        eprintln!("error: {}: {}", failure.type_name, failure.error);
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            schema,
            output,
            runtime_package,
            strict,
        } => {
            let config = GeneratorConfig::new()
                .package_option(&schema.package_option)
                .runtime_package(runtime_package);
            let report = schema.generate(config.clone())?;

            report_failures(&report);
            if strict && !report.is_complete() {
                bail!("{} types failed to generate", report.failures.len());
            }

            let written = write_artifacts(&report, &output, &config)?;
            println!("Generated {} marshallers in {}", written.len(), output.display());
        }
        Commands::Check { schema } => {
            let config = GeneratorConfig::new().package_option(&schema.package_option);
            let report = schema.generate(config)?;

            report_failures(&report);
            if !report.is_complete() {
                bail!("{} types failed to generate", report.failures.len());
            }
            println!("{} marshallers OK", report.artifacts.len());
        }
    }

    Ok(())
}
