use std::io::{self, BufRead, Write};

use clap::Parser;
use exprtree::{ast::ExpressionTree, build_expression_tree, evaluate, format_result};

/// exprtree evaluates arithmetic, comparison, bitwise and logical expressions
/// through an expression tree.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the in-order, pre-order and post-order renderings of each tree.
    #[arg(short, long)]
    traversals: bool,

    /// Print the structure of each tree, drawn on its side.
    #[arg(long)]
    tree: bool,

    /// Expression to evaluate. Starts an interactive session when omitted.
    expression: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Some(expression) = &args.expression {
        if !run(expression, &args) {
            std::process::exit(1);
        }
        return;
    }

    if let Err(e) = repl(&args) {
        eprintln!("Failed to read input: {e}");
        std::process::exit(1);
    }
}

/// Runs the interactive session until `exit`, `quit` or end of input.
fn repl(args: &Args) -> io::Result<()> {
    println!("Expression Tree Calculator");
    println!("Type an expression to evaluate, or 'exit' to quit.");
    println!("Examples: '5+3', '(5+3)*2', '10-4+7', '2^3^2', '6 xor 3'.");
    println!();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let expression = line.trim();

        match expression {
            "exit" | "quit" => break,
            "" => continue,
            _ => {
                run(expression, args);
                println!();
            },
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// Evaluates one expression and prints the outcome. Returns `false` on error.
fn run(expression: &str, args: &Args) -> bool {
    let result = build_expression_tree(expression).and_then(|tree| {
                                                       print_diagnostics(&tree, args);
                                                       evaluate(&tree)
                                                   });

    match result {
        Ok(value) => {
            println!("Result: {}", format_result(value));
            true
        },
        Err(e) => {
            log::debug!("evaluation of {expression:?} failed: {e:?}");
            eprintln!("{e}");
            false
        },
    }
}

fn print_diagnostics(tree: &ExpressionTree, args: &Args) {
    if args.tree {
        println!("Expression Tree Structure:");
        print!("{}", tree.render_sideways());
        println!();
    }
    if args.traversals {
        println!("Inorder: {}", tree.in_order());
        println!("Preorder: {}", tree.pre_order());
        println!("Postorder: {}", tree.post_order());
    }
}
