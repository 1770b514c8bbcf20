use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use expression_parser::interpreter::parser::ParserConfig;
use expression_parser::interpreter::{parse_with, postfix, render, tokens_to_string};
use log::info;

/// Parses an infix expression and prints its expression tree
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to parse, e.g. "(1+x)*(2/4)"
    expression: String,

    /// Print the tree as an indented outline instead of a one-line dump
    #[clap(long, conflicts_with = "postfix")]
    tree: bool,

    /// Print the expression in postfix order instead of a tree
    #[clap(long)]
    postfix: bool,

    /// Keep the last operand when operands are left over (e.g. "12+3")
    #[clap(long)]
    lenient: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let expression = &args.expression;
    if args.postfix {
        let tokens = postfix(expression)
            .with_context(|| format!("could not convert {:?} to postfix", expression))?;
        println!("{}", tokens_to_string(&tokens));
        return Ok(());
    }

    let config = if args.lenient {
        ParserConfig::lenient()
    } else {
        ParserConfig::default()
    };
    info!("parsing {:?} with {:?}", expression, config);
    let tree = parse_with(expression, &config)
        .with_context(|| format!("could not parse expression {:?}", expression))?;

    if args.tree {
        print!("{}", tree);
    } else {
        println!("{}", render(&tree)?);
    }
    Ok(())
}
