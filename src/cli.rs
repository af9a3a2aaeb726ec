/// CLI argument parsing and command execution.
use clap::{Parser, ValueEnum};
use postpress::error::AppError;
use postpress::stages::{Stage, TextingShorthand};
use postpress::{Compressor, TextDocument, MAX_POST_LENGTH};
use std::io::{self, Read};
use std::path::Path;

/// Postpress - shorten text to fit a post length limit.
#[derive(Parser, Debug)]
#[command(name = "postpress")]
#[command(about = "Shorten text to fit a character limit using heuristic rewrite rules")]
#[command(version)]
pub struct Cli {
    /// Input file path (use '-' for stdin or omit for direct text input)
    #[arg(value_name = "FILE|TEXT")]
    pub input: Option<String>,

    /// Character limit the text must fit within
    #[arg(short, long, default_value_t = MAX_POST_LENGTH)]
    pub limit: usize,

    /// Also apply aggressive texting shorthand after the standard pipeline
    /// (may rewrite URL text)
    #[arg(long)]
    pub texting: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format options.
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Compressed text on stdout, summary on stderr
    Text,
    /// JSON summary for scripting
    Json,
}

impl Cli {
    /// Execute the CLI command.
    pub fn run(self) -> Result<(), AppError> {
        let text = Self::get_input(self.input.as_deref())?;

        let compressor = Compressor::with_limit(self.limit)?;
        let mut doc = TextDocument::new(text);
        compressor.compress(&mut doc);

        if self.texting {
            TextingShorthand::new()?.apply(&mut doc);
        }

        match self.format {
            OutputFormat::Text => {
                println!("{}", doc.compressed());
                eprintln!("Original:  {} chars", doc.original().chars().count());
                eprintln!("Effective: {} chars", doc.effective_len());
                eprintln!("Reduction: {:.2}%", doc.compression_level());
                if !doc.urls().is_empty() {
                    eprintln!("URLs preserved: {}", doc.urls().len());
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&doc.summary())?);
            }
        }

        Ok(())
    }

    /// Resolve the input argument to text: stdin for '-' or no argument, file
    /// contents for an existing path, otherwise the argument itself.
    fn get_input(input: Option<&str>) -> Result<String, AppError> {
        match input {
            None | Some("-") => {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                Ok(buffer)
            }
            Some(arg) => {
                if Path::new(arg).is_file() {
                    Ok(std::fs::read_to_string(arg)?)
                } else {
                    Ok(arg.to_string())
                }
            }
        }
    }
}
