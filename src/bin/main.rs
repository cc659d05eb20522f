//! SVMCFG Command Line Interface
//!
//! A command-line interface for composing, inspecting, and checking
//! training configurations for LibSVM-compatible solvers.

use clap::{Args, Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::{error, info, warn};
use std::path::PathBuf;
use std::process;
use svmcfg::{
    ClassWeight, ConfigDocument, ConfigError, ExecutionParams, Formulation, Kernel, Result,
    SolverParams, TrainConfig,
};

#[derive(Parser)]
#[command(name = "svmcfg")]
#[command(about = "Typed training configuration for LibSVM-compatible SVM solvers")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "SVMCFG Contributors")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose a configuration and write it as JSON
    Init(InitArgs),
    /// Display a configuration and its resolved native parameter record
    Show(ShowArgs),
    /// Check a configuration against the solver's acceptance rules
    Check(CheckArgs),
}

#[derive(Args)]
struct InitArgs {
    /// SVM formulation
    #[arg(short = 's', long, default_value = "c-svc")]
    svm_type: CliSvmType,

    /// Kernel function
    #[arg(short = 't', long, default_value = "rbf")]
    kernel: CliKernelType,

    /// Regularization parameter C (c-svc, epsilon-svr, nu-svr)
    #[arg(short = 'C', long, default_value = "1.0")]
    cost: f64,

    /// Nu parameter (nu-svc, one-class, nu-svr)
    #[arg(long, default_value = "0.5")]
    nu: f64,

    /// Epsilon in the epsilon-insensitive loss (epsilon-svr)
    #[arg(short = 'p', long, default_value = "0.1")]
    loss_epsilon: f64,

    /// Per-class C multiplier for c-svc (repeatable)
    ///
    /// Labels may be negative, so hyphen-leading values are accepted.
    #[arg(
        short = 'w',
        long = "weight",
        value_name = "LABEL:WEIGHT",
        allow_hyphen_values = true
    )]
    weights: Vec<String>,

    /// Degree of the polynomial kernel
    #[arg(long, default_value = "3")]
    degree: i32,

    /// Kernel coefficient gamma (defaults to 1/n_features at training time)
    #[arg(short = 'g', long)]
    gamma: Option<f64>,

    /// Independent term of the polynomial and sigmoid kernels
    #[arg(short = 'r', long, default_value = "0.0")]
    coef0: f64,

    /// Termination tolerance
    #[arg(short = 'e', long, default_value = "0.001")]
    epsilon: f64,

    /// Cross-validation folds (0 disables cross-validation)
    #[arg(short = 'n', long, default_value = "0")]
    folds: u32,

    /// Kernel cache size in MB
    #[arg(short = 'm', long, default_value = "100.0")]
    cache_size: f64,

    /// Disable the shrinking heuristics
    #[arg(long)]
    no_shrinking: bool,

    /// Train for probability estimates
    #[arg(short = 'b', long)]
    probability: bool,

    /// Free-form description stored in the document metadata
    #[arg(long)]
    description: Option<String>,

    /// Output configuration file (prints to stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Debug)]
enum CliSvmType {
    /// C-support vector classification
    #[value(name = "c-svc")]
    CSvc,
    /// Nu-support vector classification
    #[value(name = "nu-svc")]
    NuSvc,
    /// Distribution estimation (one-class SVM)
    #[value(name = "one-class")]
    OneClass,
    /// Epsilon-support vector regression
    #[value(name = "epsilon-svr")]
    EpsilonSvr,
    /// Nu-support vector regression
    #[value(name = "nu-svr")]
    NuSvr,
}

#[derive(ValueEnum, Clone, Debug)]
enum CliKernelType {
    /// u'*v
    #[value(name = "linear")]
    Linear,
    /// (gamma*u'*v + coef0)^degree
    #[value(name = "polynomial")]
    Polynomial,
    /// exp(-gamma*|u-v|^2)
    #[value(name = "rbf")]
    Rbf,
    /// tanh(gamma*u'*v + coef0)
    #[value(name = "sigmoid")]
    Sigmoid,
    /// Kernel values supplied in the training data
    #[value(name = "precomputed")]
    Precomputed,
}

#[derive(Args)]
struct ShowArgs {
    /// Configuration file
    config: PathBuf,
}

#[derive(Args)]
struct CheckArgs {
    /// Configuration file
    config: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let result = match cli.command {
        Commands::Init(args) => init_command(args),
        Commands::Show(args) => show_command(args),
        Commands::Check(args) => check_command(args),
    };

    if let Err(e) = result {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn init_command(args: InitArgs) -> Result<()> {
    info!("Composing training configuration...");

    let formulation = build_formulation(&args)?;
    let kernel = build_kernel(&args);
    let execution = ExecutionParams::new(args.epsilon, args.folds)
        .with_cache_size_mb(args.cache_size)
        .with_shrinking(!args.no_shrinking)
        .with_probability(args.probability);

    let config = TrainConfig::new(formulation, kernel, execution);
    info!(
        "Resolved: {} with {} kernel",
        config.params().svm_type,
        config.params().kernel_type
    );

    // Composition never fails, so surface a future rejection as a warning
    if let Err(e) = config.check() {
        warn!("{e}");
    }

    let mut document = ConfigDocument::from_config(&config);
    if let Some(description) = args.description.clone() {
        document = document.with_description(description);
    }

    if let Some(output) = &args.output {
        document.save_to_file(output)?;
        info!("Configuration saved to: {output:?}");
    } else {
        let json = serde_json::to_string_pretty(&document)
            .map_err(|e| ConfigError::SerializationError(e.to_string()))?;
        println!("{json}");
    }

    Ok(())
}

fn show_command(args: ShowArgs) -> Result<()> {
    info!("Loading configuration from: {:?}", args.config);
    let document = ConfigDocument::load_from_file(&args.config)?;

    document.print_summary();

    let config = document.into_config()?;
    print_native_record(config.params());

    Ok(())
}

fn check_command(args: CheckArgs) -> Result<()> {
    info!("Loading configuration from: {:?}", args.config);
    let document = ConfigDocument::load_from_file(&args.config)?;
    let config = document.into_config()?;

    config.check()?;

    println!(
        "Configuration accepted: {} with {} kernel",
        config.params().svm_type,
        config.params().kernel_type
    );

    Ok(())
}

fn build_formulation(args: &InitArgs) -> Result<Formulation> {
    if !args.weights.is_empty() && !matches!(args.svm_type, CliSvmType::CSvc) {
        warn!("Class weights are only used by c-svc, ignoring");
    }

    let formulation = match args.svm_type {
        CliSvmType::CSvc => {
            let mut formulation = Formulation::c_svc(args.cost);
            for spec in &args.weights {
                let weight = parse_weight_spec(spec)?;
                formulation = formulation.with_class_weight(weight.label, weight.weight);
            }
            formulation
        }
        CliSvmType::NuSvc => Formulation::nu_svc(args.nu),
        CliSvmType::OneClass => Formulation::one_class(args.nu),
        CliSvmType::EpsilonSvr => Formulation::epsilon_svr(args.cost, args.loss_epsilon),
        CliSvmType::NuSvr => Formulation::nu_svr(args.cost, args.nu),
    };

    Ok(formulation)
}

fn build_kernel(args: &InitArgs) -> Kernel {
    // gamma = 0 is the auto sentinel resolved by the solver as 1/n_features
    let gamma = args.gamma.unwrap_or(0.0);

    match args.kernel {
        CliKernelType::Linear => Kernel::linear(),
        CliKernelType::Polynomial => Kernel::polynomial(args.degree, gamma, args.coef0),
        CliKernelType::Rbf => Kernel::rbf(gamma),
        CliKernelType::Sigmoid => Kernel::sigmoid(gamma, args.coef0),
        CliKernelType::Precomputed => Kernel::precomputed(),
    }
}

fn parse_weight_spec(spec: &str) -> Result<ClassWeight> {
    let (label, weight) = spec.split_once(':').ok_or_else(|| {
        ConfigError::InvalidParameter(format!(
            "Invalid weight spec '{spec}', expected LABEL:WEIGHT"
        ))
    })?;

    let label = label
        .trim()
        .parse::<i32>()
        .map_err(|_| ConfigError::InvalidParameter(format!("Invalid weight label '{label}'")))?;
    let weight = weight
        .trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::InvalidParameter(format!("Invalid weight value '{weight}'")))?;

    Ok(ClassWeight { label, weight })
}

fn print_native_record(params: &SolverParams) {
    println!("\nNative Parameter Record:");
    println!(
        "  svm_type:    {} (code {})",
        params.svm_type,
        params.svm_type.to_raw()
    );
    println!(
        "  kernel_type: {} (code {})",
        params.kernel_type,
        params.kernel_type.to_raw()
    );
    println!("  degree:      {}", params.degree);
    if params.gamma == 0.0 {
        println!("  gamma:       auto (1/n_features)");
    } else {
        println!("  gamma:       {}", params.gamma);
    }
    println!("  coef0:       {}", params.coef0);
    println!("  C:           {}", params.c);
    println!("  nu:          {}", params.nu);
    println!("  p:           {}", params.p);
    for (label, weight) in params.weight_label.iter().zip(&params.weight) {
        println!("  weight[{label}]:   {weight}");
    }
    println!("  cache_size:  {} MB", params.cache_size_mb);
    println!("  eps:         {}", params.eps);
    println!("  shrinking:   {}", params.shrinking);
    println!("  probability: {}", params.probability);
    println!("  n_folds:     {}", params.n_folds);
}
