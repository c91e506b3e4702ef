use std::path::PathBuf;

use clap::Args;
use devtools_generate::model::DEFAULT_COLUMN_DIVIDER;
use devtools_generate::{GenerateOptions, GenerationEngine};

use super::CommandContext;
use crate::CliError;

#[derive(Args, Debug)]
pub struct CsvArgs {
    /// Schema file: header names on line 1, value types on line 2.
    #[arg(long, value_name = "PATH")]
    schema: Option<PathBuf>,
    /// Number of data rows to write.
    #[arg(long)]
    count: usize,
    /// Output field separator; only the first character is used.
    #[arg(long, value_name = "CHAR")]
    column_divider: Option<String>,
    /// Print the generation report as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
}

pub fn run(args: CsvArgs, ctx: &mut CommandContext<'_>) -> Result<(), CliError> {
    let schema = args
        .schema
        .unwrap_or_else(|| ctx.settings.csv.schema.clone());
    let schema_path = if schema.is_absolute() {
        schema
    } else {
        std::env::current_dir()?.join(schema)
    };
    let column_divider = match args.column_divider {
        Some(divider) => divider.chars().next().unwrap_or(DEFAULT_COLUMN_DIVIDER),
        None => ctx.settings.csv.column_divider,
    };

    let options = GenerateOptions {
        schema_path,
        count: args.count,
        column_divider,
        seed: ctx.seed,
    };
    let result = GenerationEngine::new(options).run()?;

    if args.json {
        ctx.out
            .line(&serde_json::to_string_pretty(&result.report)?)?;
        return Ok(());
    }
    ctx.out.success("✓ CSV file generated successfully")?;
    ctx.out
        .line(&format!("Output: {}", result.output_path.display()))?;
    ctx.out.line(&format!(
        "Rows: {}, columns: {}",
        result.report.rows_written,
        result.report.columns.len()
    ))?;
    Ok(())
}
