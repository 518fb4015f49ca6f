use clap::{Parser, ValueEnum};
use scte35::{Cipher, EncryptedPacket, LogOutput, Logger};

#[derive(Clone, Copy, ValueEnum)]
enum Output {
    Stdout,
    Stderr,
    Log,
}

#[derive(Parser)]
pub struct Command {
    /// The value of the encryption_algorithm field (decimal or 0x-prefixed hex)
    #[clap(value_parser = parse_int)]
    algorithm: u32,
    /// The value of the cw_index field (decimal or 0x-prefixed hex)
    #[clap(default_value = "0", value_parser = parse_int)]
    cw_index: u32,
    /// Where to write the dump to
    #[clap(default_value = "stdout", long, short, value_enum)]
    output: Output,
    /// Also print the classification of every 6-bit cipher value
    #[clap(long)]
    table: bool,
}

fn parse_int(input: &str) -> Result<u32, String> {
    let parsed = if let Some(hex) = input.strip_prefix("0x").or(input.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16)
    } else {
        input.parse()
    };

    parsed.map_err(|e| format!("Could not parse '{input}' as integer: {e}"))
}

fn main() -> std::io::Result<()> {
    pretty_env_logger::formatted_builder()
        .parse_filters(&std::env::var("RUST_LOG").unwrap_or("info".to_string()))
        .init();

    let command = Command::parse();

    let output = match command.output {
        Output::Stdout => LogOutput::StdOut,
        Output::Stderr => LogOutput::StdErr,
        Output::Log => LogOutput::Log(log::Level::Info),
    };

    let packet = EncryptedPacket::new(command.algorithm, command.cw_index);
    Logger::log(&output, &packet);

    match packet.algorithm() {
        Ok(algorithm) => log::info!("Payload uses registered algorithm '{algorithm}'"),
        Err(e) => log::warn!("{e}"),
    }

    if command.table {
        for code in 0..=Cipher::MAX {
            println!("{code:>2} (0x{code:02X}): {}", Cipher::classify(code));
        }
    }

    Ok(())
}
