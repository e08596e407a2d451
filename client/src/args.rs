use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args as ArgsTrait, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Prints the shape and reductions of an array.
    Stats(StatsConfig),
    /// Applies a function to every element of an array.
    Map(MapConfig),
    /// Combines two arrays of the same shape elementwise.
    Combine(CombineConfig),
}

#[derive(ArgsTrait, Clone, Debug)]
pub struct StatsConfig {
    /// The array file to read.
    #[arg(short, long)]
    pub input: PathBuf,
}

#[derive(ArgsTrait, Clone, Debug)]
pub struct MapConfig {
    /// The function to apply.
    ///
    /// One of: sin, cos, tan, exp, log, sqrt, square, neg
    #[arg(short, long, verbatim_doc_comment)]
    pub function: Function,

    /// The array file to read.
    #[arg(short, long)]
    pub input: PathBuf,

    /// The file to write the result to.
    #[arg(short, long)]
    pub output: PathBuf,
}

#[derive(ArgsTrait, Clone, Debug)]
pub struct CombineConfig {
    /// The elementwise operation.
    ///
    /// One of: add, sub, mul, div
    #[arg(long, verbatim_doc_comment)]
    pub operation: Operation,

    /// The left operand's array file.
    #[arg(long)]
    pub lhs: PathBuf,

    /// The right operand's array file.
    #[arg(long)]
    pub rhs: PathBuf,

    /// The file to write the result to.
    #[arg(short, long)]
    pub output: PathBuf,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Exp,
    Log,
    Sqrt,
    Square,
    Neg,
}

impl FromStr for Function {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "sin" => Ok(Self::Sin),
            "cos" => Ok(Self::Cos),
            "tan" => Ok(Self::Tan),
            "exp" => Ok(Self::Exp),
            "log" => Ok(Self::Log),
            "sqrt" => Ok(Self::Sqrt),
            "square" => Ok(Self::Square),
            "neg" => Ok(Self::Neg),
            unknown => Err(format!("unknown function: {unknown}")),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "add" => Ok(Self::Add),
            "sub" => Ok(Self::Sub),
            "mul" => Ok(Self::Mul),
            "div" => Ok(Self::Div),
            unknown => Err(format!("unknown operation: {unknown}")),
        }
    }
}
