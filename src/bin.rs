#[cfg(feature = "binary")]
pub fn main() {
  if let Err(e) = run() {
    eprintln!("urlparams: {}", e);
    std::process::exit(1);
  }
}

#[cfg(feature = "binary")]
fn run() -> Result<(), Box<dyn std::error::Error>> {
  use clap::{command, Parser};
  use std::io::Read;

  #[derive(Parser, Debug)]
  #[command(author, version, about, long_about = None)]
  struct Args {
    /// Raw query string such as "?a=1&b=2". Read from stdin when omitted
    input: Option<String>,

    /// Treat INPUT as a full URL and use its query portion
    #[arg(short, long)]
    url: bool,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Log to stderr
    #[arg(short, long)]
    verbose: bool,
  }

  let args = Args::parse();

  if args.verbose {
    std::env::set_var(urlparams::logger::LOGS_ENV_VAR, "1");
  }

  let input = match args.input {
    Some(input) => input,
    None => {
      let mut buf = String::new();
      std::io::stdin().read_to_string(&mut buf)?;
      buf.trim_end_matches(&['\r', '\n'][..]).to_string()
    }
  };

  let params = if args.url {
    urlparams::log!("[Cli] Reading query from URL {:?}", input);
    urlparams::get_parameters_from_url(&input)
  } else {
    urlparams::get_parameters(&input)
  };

  let json = if args.pretty {
    serde_json::to_string_pretty(&params)?
  } else {
    params.to_json()?
  };

  println!("{}", json);

  Ok(())
}

#[cfg(not(feature = "binary"))]
pub fn main() {
  println!("This binary was not compiled with the binary feature enabled.");
  println!("Please compile with \"--features binary\" to enable the binary.");
}
