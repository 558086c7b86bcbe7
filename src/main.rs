use cassia::ast::{FunctionNode, Node, RangeOperator};
use cassia::cli::{self, CliError, CompileOptions};
use clap::{Parser as ClapParser, Subcommand};
use std::fs;
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "cassia")]
#[command(about = "Cassia - compile schema-aware filter expressions into search query DSL")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON schema file describing the dataset's fields
    /// (reads from stdin if not provided and input is piped)
    #[arg(short, long, global = true)]
    schema: Option<String>,

    /// Time zone applied to date-field clauses
    #[arg(long, global = true)]
    time_zone: Option<String>,

    /// Forward ignore_unmapped to nested queries
    #[arg(long, global = true)]
    ignore_unmapped: Option<bool>,

    /// Pretty-print the compiled query
    #[arg(short, long, global = true)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a range comparison (field, operator, value)
    Range {
        field: String,

        /// One of >, >=, <, <= (or gt, gte, lt, lte)
        operator: String,

        value: String,

        /// Print the source expression instead of the compiled query
        #[arg(short, long)]
        expression: bool,
    },

    /// Compile an equality match (field, value)
    Match {
        field: String,
        value: String,

        /// Print the source expression instead of the compiled query
        #[arg(short, long)]
        expression: bool,
    },

    /// Compile a field-presence check
    Exists { field: String },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let schema = read_schema(cli.schema.as_deref())?;
    let mut options = CompileOptions {
        schema,
        time_zone: cli.time_zone,
        ignore_unmapped: cli.ignore_unmapped,
        pretty: cli.pretty,
        expression: false,
    };

    let node = match cli.command {
        Commands::Range {
            field,
            operator,
            value,
            expression,
        } => {
            options.expression = expression;
            let operator = RangeOperator::from_symbol(&operator)
                .or_else(|_| RangeOperator::from_key(&operator))?;
            let value = cassia::Literal::parse(&value)?;
            Node::from(FunctionNode::range(&field, operator, value)?)
        }
        Commands::Match {
            field,
            value,
            expression,
        } => {
            options.expression = expression;
            Node::from(FunctionNode::is(&field, &value)?)
        }
        Commands::Exists { field } => Node::from(FunctionNode::exists(&field)?),
    };

    println!("{}", cli::execute(&node, &options)?);
    Ok(())
}

fn read_schema(path: Option<&str>) -> Result<Option<String>, CliError> {
    match path {
        Some(path) => Ok(Some(fs::read_to_string(path)?)),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(CliError::Io)?;
            if buffer.trim().is_empty() {
                Ok(None)
            } else {
                Ok(Some(buffer))
            }
        }
        None => Ok(None),
    }
}
