use card_qr::config::canvas_size;
use card_qr::encoder::patterns::data_module_count;
use card_qr::tools::{encode_batch, hex, load_contacts, matrix_stats, save_png, to_text};
use card_qr::{ContactCard, QrMatrix, codewords, encode_to_matrix, share_payload};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "card_qr CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode arbitrary text
    Encode {
        #[arg(long)]
        text: String,
        /// Write a PNG instead of printing to the terminal
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long)]
        size: Option<u32>,
    },
    /// Encode a contact's name and phone number
    Card {
        #[arg(long, default_value = "")]
        first: String,
        #[arg(long, default_value = "")]
        last: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long)]
        size: Option<u32>,
    },
    /// Encode every contact of a JSON array into one PNG each
    Batch {
        #[arg(long)]
        contacts: PathBuf,
        #[arg(long)]
        out_dir: PathBuf,
        #[arg(long)]
        size: Option<u32>,
    },
    /// Print version, codewords and module stats for a payload
    Inspect {
        #[arg(long)]
        text: String,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let ok = match cli.command {
        Command::Encode { text, out, size } => encode_cmd(&text, out.as_deref(), size),
        Command::Card {
            first,
            last,
            phone,
            out,
            size,
        } => card_cmd(&ContactCard::new(&first, &last, &phone), out.as_deref(), size),
        Command::Batch {
            contacts,
            out_dir,
            size,
        } => batch_cmd(&contacts, &out_dir, size),
        Command::Inspect { text } => inspect_cmd(&text),
    };

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn output(matrix: &QrMatrix, out: Option<&Path>, size: Option<u32>) -> bool {
    match out {
        Some(path) => {
            let size = size.unwrap_or_else(canvas_size);
            match save_png(matrix, path, size) {
                Ok(()) => {
                    println!(
                        "Wrote {} ({}x{} modules, {}x{} px)",
                        path.display(),
                        matrix.size(),
                        matrix.size(),
                        size,
                        size
                    );
                    true
                }
                Err(err) => {
                    eprintln!("Failed to write {}: {}", path.display(), err);
                    false
                }
            }
        }
        None => {
            print!("{}", to_text(matrix, 2));
            true
        }
    }
}

fn encode_cmd(text: &str, out: Option<&Path>, size: Option<u32>) -> bool {
    match encode_to_matrix(text) {
        Ok(matrix) => output(&matrix, out, size),
        Err(err) => {
            eprintln!("Could not encode text: {}", err);
            false
        }
    }
}

fn card_cmd(card: &ContactCard, out: Option<&Path>, size: Option<u32>) -> bool {
    let payload = match share_payload(card) {
        Ok(payload) => payload,
        Err(err) => {
            eprintln!("{}", err);
            return false;
        }
    };
    println!("Payload: {} ({} bytes)", payload, payload.len());
    encode_cmd(&payload, out, size)
}

fn batch_cmd(contacts: &Path, out_dir: &Path, size: Option<u32>) -> bool {
    let cards = match load_contacts(contacts) {
        Ok(cards) => cards,
        Err(err) => {
            eprintln!("Failed to load {}: {}", contacts.display(), err);
            return false;
        }
    };
    if let Err(err) = std::fs::create_dir_all(out_dir) {
        eprintln!("Failed to create {}: {}", out_dir.display(), err);
        return false;
    }

    let size = size.unwrap_or_else(canvas_size);
    let start = Instant::now();
    let results = encode_batch(&cards, out_dir, size);
    let elapsed = start.elapsed();

    let mut success = 0;
    for (i, (card, result)) in cards.iter().zip(&results).enumerate() {
        match result {
            Ok(path) => {
                success += 1;
                println!("OK: [{}] {}", i, path.display());
            }
            Err(err) => println!(
                "FAIL: [{}] {} {}: {}",
                i,
                card.first_name.trim(),
                card.last_name.trim(),
                err
            ),
        }
    }

    println!(
        "\nResult: {}/{} encoded in {:.1} ms",
        success,
        cards.len(),
        elapsed.as_secs_f64() * 1000.0
    );
    success == cards.len()
}

fn inspect_cmd(text: &str) -> bool {
    let cw = match codewords(text) {
        Ok(cw) => cw,
        Err(err) => {
            eprintln!("Could not encode text: {}", err);
            return false;
        }
    };
    let version = cw.version;
    println!("Payload: {} bytes", text.len());
    println!(
        "Version: {} ({}x{}), capacity {} bytes",
        version,
        version.size(),
        version.size(),
        version.capacity()
    );
    println!(
        "Codewords: {} data + {} parity, {} data modules",
        cw.data.len(),
        cw.parity.len(),
        data_module_count(version)
    );
    println!("Data:   {}", hex(&cw.data));
    println!("Parity: {}", hex(&cw.parity));

    match encode_to_matrix(text) {
        Ok(matrix) => {
            let stats = matrix_stats(&matrix);
            println!(
                "Modules: dark={} total={} dark_ratio={:.2}%",
                stats.dark_modules,
                stats.total_modules,
                stats.dark_ratio * 100.0
            );
            true
        }
        Err(err) => {
            eprintln!("Could not encode text: {}", err);
            false
        }
    }
}
