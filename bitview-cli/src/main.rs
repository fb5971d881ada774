use std::io::{self, Write};

use anyhow::bail;
use bitview_codec::{ByteOrder, FloatFields, FloatFormat, Scalar, nibbles, parse_binary, table};
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

#[derive(Parser, Debug)]
#[command(name = "bitview-cli", author, version, about, long_about = None)]
struct Cli {
    /// Subcommand/tool to run
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a binary digit string to an integer
    Bin {
        /// The binary number to convert.
        #[arg(short, long)]
        binary: String,
    },
    /// Pack a float, int, or hex value into its 4-byte encoding and show the bits
    Bits(BitsArgs),
    /// Print a decimal/hex/binary lookup table
    Table {
        /// The base number used for the range end. Default is 2.
        #[arg(short, long, default_value_t = 2)]
        base: u64,

        /// The exponent number used for the range end. Default is 8.
        #[arg(short, long, default_value_t = 8)]
        power: u32,
    },
    /// Show the field breakdown of a floating-point encoding
    Inspect {
        /// The floating-point number to inspect.
        #[arg(short, long)]
        float: f32,

        /// The encoding to inspect: `f32`, `f16`, or `bf16`.
        #[arg(long, default_value_t = FloatFormat::Single)]
        format: FloatFormat,
    },
}

#[derive(Args, Debug)]
struct BitsArgs {
    #[command(flatten)]
    input: BitsInput,

    /// The byte order to use. Default is `@` (native).
    #[arg(short, long, default_value = "@")]
    order: ByteOrder,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct BitsInput {
    /// A floating-point number to convert and pack into bits.
    #[arg(short, long)]
    float: Option<f32>,

    /// An integer number to convert and pack into bits.
    #[arg(short, long)]
    int: Option<i32>,

    /// A hexadecimal string to convert and pack into bits.
    #[arg(short = 'x', long)]
    hex: Option<String>,
}

fn run_bin<W: Write>(out: &mut W, binary: &str) -> anyhow::Result<()> {
    let value = parse_binary(binary)?;
    writeln!(out, "Integer: {value}")?;
    Ok(())
}

fn run_bits<W: Write>(out: &mut W, args: &BitsArgs) -> anyhow::Result<()> {
    let scalar = if let Some(float) = args.input.float {
        Scalar::Float(float)
    } else if let Some(int) = args.input.int {
        Scalar::Int(int)
    } else if let Some(hex) = &args.input.hex {
        let value = Scalar::from_hex(hex)?;
        writeln!(out, "int: {value}")?;
        Scalar::Int(value)
    } else {
        // Unreachable through clap (the input group is required),
        // but kept so direct callers get the same contract.
        bail!("No input value given. Pass one of --float, --int, or --hex.")
    };

    debug!(order = %args.order, ?scalar, "packing scalar");
    writeln!(out, "0b {}", nibbles(&scalar.pack(args.order)))?;
    Ok(())
}

fn run_table<W: Write>(out: &mut W, base: u64, power: u32) -> anyhow::Result<()> {
    table::write_table(out, base, power)?;
    Ok(())
}

fn run_inspect<W: Write>(out: &mut W, value: f32, format: FloatFormat) -> anyhow::Result<()> {
    let fields = FloatFields::encode(value, format);

    writeln!(out, "value ({format}): {value}")?;
    writeln!(
        out,
        "encoded (hex): {bits:#0width$X}",
        bits = fields.bits(),
        width = format.bit_width() / 4 + 2,
    )?;
    writeln!(out, "encoded (bin): 0b {}", nibbles(&fields.to_be_bytes()))?;
    writeln!(out, "decoded ({format}): {}", fields.decode())?;
    writeln!(out, "fields (sign exponent mantissa): {fields}")?;
    writeln!(
        out,
        "exponent: {} (bias {}, unbiased {})",
        fields.exponent(),
        format.bias(),
        i64::from(fields.exponent()) - i64::from(format.bias()),
    )?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        // Standard logger, configured via the RUST_LOG env variable
        .with(tracing_subscriber::fmt::layer().with_filter(EnvFilter::from_default_env()))
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Bin { binary } => run_bin(&mut out, &binary),
        Commands::Bits(args) => run_bits(&mut out, &args),
        Commands::Table { base, power } => run_table(&mut out, base, power),
        Commands::Inspect { float, format } => run_inspect(&mut out, float, format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn capture<F: FnOnce(&mut Vec<u8>) -> anyhow::Result<()>>(run: F) -> String {
        let mut buffer = Vec::new();
        run(&mut buffer).expect("command failed");
        String::from_utf8(buffer).expect("output is not UTF-8")
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_bin_output() {
        assert_eq!(capture(|out| run_bin(out, "11111111")), "Integer: 255\n");
    }

    #[test]
    fn test_bits_float_little_endian() {
        let args = BitsArgs {
            input: BitsInput {
                float: Some(1.0),
                int: None,
                hex: None,
            },
            order: ByteOrder::LittleEndian,
        };
        assert_eq!(
            capture(|out| run_bits(out, &args)),
            "0b 0000 0000 0000 0000 1000 0000 0011 1111\n"
        );
    }

    #[test]
    fn test_bits_hex_prints_int_first() {
        let args = BitsArgs {
            input: BitsInput {
                float: None,
                int: None,
                hex: Some("3F800000".to_string()),
            },
            order: ByteOrder::BigEndian,
        };
        assert_eq!(
            capture(|out| run_bits(out, &args)),
            "int: 1065353216\n0b 0011 1111 1000 0000 0000 0000 0000 0000\n"
        );
    }

    #[test]
    fn test_bits_out_of_range_hex_fails() {
        let args = BitsArgs {
            input: BitsInput {
                float: None,
                int: None,
                hex: Some("80000000".to_string()),
            },
            order: ByteOrder::default(),
        };
        assert!(run_bits(&mut Vec::new(), &args).is_err());
    }

    #[test]
    fn test_bits_no_input_fails() {
        let args = BitsArgs {
            input: BitsInput {
                float: None,
                int: None,
                hex: None,
            },
            order: ByteOrder::default(),
        };
        assert!(run_bits(&mut Vec::new(), &args).is_err());
    }

    #[test]
    fn test_table_defaults() {
        let rendered = capture(|out| run_table(out, 2, 8));
        assert_eq!(rendered.lines().count(), 2 + 256);
        assert!(rendered.starts_with("| int | hex | bin |\n| --- | --- | --- |\n"));
    }

    #[test]
    fn test_inspect_single_one() {
        let rendered = capture(|out| run_inspect(out, 1.0, FloatFormat::Single));
        assert_eq!(
            rendered,
            "value (f32): 1\n\
             encoded (hex): 0x3F800000\n\
             encoded (bin): 0b 0011 1111 1000 0000 0000 0000 0000 0000\n\
             decoded (f32): 1\n\
             fields (sign exponent mantissa): 0 01111111 00000000000000000000000\n\
             exponent: 127 (bias 127, unbiased 0)\n"
        );
    }

    #[test]
    fn test_inspect_half_width() {
        let rendered = capture(|out| run_inspect(out, 1.0, FloatFormat::Half));
        assert!(rendered.contains("encoded (hex): 0x3C00\n"));
        assert!(rendered.contains("encoded (bin): 0b 0011 1100 0000 0000\n"));
    }
}
