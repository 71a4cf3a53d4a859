use std::io::{BufRead, Write};
use clap::Parser;
use log::{error, info};
use num_traits::Zero;
use unipoly::{Poly, TokenReader, ParseError};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    // 0 = off, 1 = info, 2 = debug, 3 = trace
    #[arg(long, default_value = "0")]
    pub log: u8,
}

impl CliArgs {
    fn log_level(&self) -> log::LevelFilter {
        use log::LevelFilter::*;
        match self.log {
            1 => Info,
            2 => Debug,
            3 => Trace,
            _ => Off,
        }
    }
}

pub struct App {
    pub args: CliArgs
}

impl App {
    pub fn new() -> Self {
        let args = CliArgs::parse();
        App { args }
    }

    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.init_logger();
        info!("args: {:?}", self.args);

        let stdin = std::io::stdin();
        let mut reader = TokenReader::new(stdin.lock());
        let mut out = std::io::stdout();

        let (res, time) = measure(|| run_flow(&mut reader, &mut out));
        info!("time: {:?}", time);

        res?;
        Ok(())
    }

    fn init_logger(&self) {
        let l = self.args.log_level();
        unipoly::util::log::init_simple_logger(l).unwrap()
    }
}

type P = Poly<f64>;

// The fixed interactive session: read two polynomials, print them with
// their sum and product, evaluate both at a point, print derivatives.
// Malformed input is reported and the step falls back (zero polynomial,
// or skipped evaluation); only real I/O failures propagate.
pub fn run_flow<I, W>(input: &mut TokenReader<I>, out: &mut W) -> std::io::Result<()>
where I: BufRead, W: Write {
    writeln!(out, "Enter polynomial 1:")?;
    let p1 = read_or_zero(input, out)?;

    writeln!(out, "Enter polynomial 2:")?;
    let p2 = read_or_zero(input, out)?;

    let sum = &p1 + &p2;
    let product = &p1 * &p2;

    writeln!(out, "Polynomial 1: {p1}")?;
    writeln!(out, "Polynomial 2: {p2}")?;
    writeln!(out, "Sum: {sum}")?;
    writeln!(out, "Product: {product}")?;

    write!(out, "Evaluate at x: ")?;
    out.flush()?;

    match input.next_token() {
        Ok(tok) => match tok.parse::<f64>() {
            Ok(x) => {
                writeln!(out, "poly1({x}) = {}", p1.eval(&x))?;
                writeln!(out, "poly2({x}) = {}", p2.eval(&x))?;
            }
            Err(_) => {
                error!("invalid value for x: '{tok}'");
                eprintln!("invalid input: '{tok}'");
            }
        },
        Err(ParseError::Io(e)) => return Err(e),
        Err(e) => report(&e),
    }

    writeln!(out, "Derivative of polynomial 1: {}", p1.derivative())?;
    writeln!(out, "Derivative of polynomial 2: {}", p2.derivative())?;

    Ok(())
}

fn read_or_zero<I, W>(input: &mut TokenReader<I>, out: &mut W) -> std::io::Result<P>
where I: BufRead, W: Write {
    match P::read_from(input, out) {
        Ok(p) => Ok(p),
        Err(ParseError::Io(e)) => Err(e),
        Err(e) => {
            report(&e);
            input.clear();
            Ok(P::zero())
        }
    }
}

fn report(e: &ParseError) {
    error!("{e}");
    eprintln!("invalid input: {e}");
}

fn measure<F, Res>(proc: F) -> (Res, std::time::Duration)
where F: FnOnce() -> Res {
    let start = std::time::Instant::now();
    let res = proc();
    let time = start.elapsed();
    (res, time)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use super::*;

    fn run(input: &str) -> String {
        let mut reader = TokenReader::new(Cursor::new(input.as_bytes().to_vec()));
        let mut out = Vec::new();
        run_flow(&mut reader, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn full_flow() {
        // poly1 = x^2 + 1, poly2 = x, evaluated at 2
        let out = run("2\n1 2\n1 0\n1\n1 1\n2\n");

        assert!(out.contains("Polynomial 1: 1x^2 + 1"));
        assert!(out.contains("Polynomial 2: 1x^1"));
        assert!(out.contains("Sum: 1x^2 + 1x^1 + 1"));
        assert!(out.contains("Product: 1x^3 + 1x^1"));
        assert!(out.contains("poly1(2) = 5"));
        assert!(out.contains("poly2(2) = 2"));
        assert!(out.contains("Derivative of polynomial 1: 2x^1"));
        assert!(out.contains("Derivative of polynomial 2: 1"));
    }

    #[test]
    fn bad_poly_falls_back_to_zero() {
        let out = run("-1\n1\n1 1\n");

        assert!(out.contains("Polynomial 1: 0"));
        assert!(out.contains("Polynomial 2: 1x^1"));
        assert!(out.contains("Sum: 1x^1"));
        assert!(out.contains("Product: 0"));
        assert!(!out.contains("poly1("));
        assert!(out.contains("Derivative of polynomial 1: 0"));
    }

    #[test]
    fn failed_read_discards_rest_of_line() {
        // poly1 dies on "bad"; the pending "9" must not leak into poly2
        let out = run("1\nbad 9\n1\n3 1\n2\n");

        assert!(out.contains("Polynomial 1: 0"));
        assert!(out.contains("Polynomial 2: 3x^1"));
        assert!(out.contains("poly2(2) = 6"));
    }

    #[test]
    fn bad_eval_value_skips_evaluation() {
        let out = run("1\n2 1\n0\nzzz\n");

        assert!(out.contains("Polynomial 1: 2x^1"));
        assert!(out.contains("Polynomial 2: 0"));
        assert!(!out.contains("poly1("));
        assert!(out.contains("Derivative of polynomial 1: 2"));
    }

    #[test]
    fn missing_eval_value_skips_evaluation() {
        let out = run("0\n0\n");

        assert!(out.contains("Sum: 0"));
        assert!(!out.contains("poly1("));
        assert!(out.contains("Derivative of polynomial 2: 0"));
    }
}
