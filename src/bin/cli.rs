use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use nik_surabaya::prelude::*;

const BANNER: &str = r#"
 ░██████╗██╗░░░██╗██████╗░░█████╗░██████╗░░█████╗░██╗░░░██╗░█████╗░
 ██╔════╝██║░░░██║██╔══██╗██╔══██╗██╔══██╗██╔══██╗╚██╗░██╔╝██╔══██╗
 ╚█████╗░██║░░░██║██████╔╝███████║██████╦╝███████║░╚████╔╝░███████║
 ░╚═══██╗██║░░░██║██╔══██╗██╔══██║██╔══██╗██╔══██║░░╚██╔╝░░██╔══██║
 ██████╔╝╚██████╔╝██║░░██║██║░░██║██████╦╝██║░░██║░░░██║░░░██║░░██║
 ╚═════╝░░╚═════╝░╚═╝░░╚═╝╚═╝░░╚═╝╚═════╝░╚═╝░░╚═╝░░░╚═╝░░░╚═╝░░╚═╝
"#;

#[derive(Parser)]
#[command(name = "nikcli")]
#[command(about = "Surabaya NIK checker - validate and decode Surabaya identity numbers", long_about = None)]
struct Cli {
    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate and decode a single NIK
    Check(CheckArgs),
    /// Show registry statistics
    Info(InfoArgs),
    /// Show information about this tool
    About,
    /// Interactive menu, like the classic console checker
    Menu(InfoArgs),
}

#[derive(Args)]
struct CheckArgs {
    /// The 16-digit NIK to check
    nik: String,
    /// Directory containing the registry files (standard layout)
    #[arg(short, long, env = "NIK_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

#[derive(Args)]
struct InfoArgs {
    /// Directory containing the registry files (standard layout)
    #[arg(short, long, env = "NIK_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let config = nik_surabaya::config::global_config();
    if cli.no_color || !config.color_output {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Check(args) => cmd_check(args, &config),
        Commands::Info(args) => cmd_info(args, &config),
        Commands::About => cmd_about(),
        Commands::Menu(args) => cmd_menu(args, &config),
    }
}

fn data_dir(arg: Option<PathBuf>, config: &NikConfig) -> PathBuf {
    arg.unwrap_or_else(|| config.data_dir.clone())
}

fn load_dataset(dir: &PathBuf) -> NikDataset {
    match NikDataset::load_standard(dir) {
        Ok(dataset) => dataset,
        Err(e) => {
            eprintln!("{} {}", "✘".red(), e.user_message());
            std::process::exit(1);
        }
    }
}

fn cmd_check(args: CheckArgs, config: &NikConfig) {
    let dataset = load_dataset(&data_dir(args.data_dir, config));
    check_and_render(&dataset, args.nik.trim());
}

fn check_and_render(dataset: &NikDataset, nik: &str) {
    match dataset.decode(nik) {
        Ok(record) => render_record(&record),
        Err(e) => eprintln!("\n{} {}\n", "✘ ERROR:".red().bold(), e),
    }
}

fn render_record(record: &NikRecord) {
    let validity = if record.is_birth_date_valid() {
        "✓ VALID".green().to_string()
    } else {
        "✘ TIDAK VALID".red().to_string()
    };

    println!();
    println!("{}", "HASIL CEK NIK SURABAYA".blue().bold());
    println!("{}", "─".repeat(48).red());
    println!("  NIK            : {}", record.nik);
    println!("  Kota           : SURABAYA ({})", record.region_code);
    println!("  Kecamatan      : {} ({})", record.district_name, record.district_code);
    println!("  Kelurahan      : {} ({})", record.subdistrict_name, record.subdistrict_code);
    println!("  Tanggal Lahir  : {}", record.formatted_birth_date());
    println!("  Gender         : {}", record.gender);
    println!("  Nomor Urut     : {}", record.sequence);
    println!("  Status Tanggal : {}", validity);
    println!("{}", "─".repeat(48).red());
    println!();
}

fn cmd_info(args: InfoArgs, config: &NikConfig) {
    let dataset = load_dataset(&data_dir(args.data_dir, config));
    render_info(&dataset);
}

fn render_info(dataset: &NikDataset) {
    println!();
    println!("{}", "INFORMASI DATABASE".blue().bold());
    println!("{}", "─".repeat(48).red());
    println!("  Kecamatan       : {} kecamatan tersedia", dataset.district_count());

    match dataset.stats() {
        Ok(stats) => {
            for (i, count) in stats.subdistrict_counts.iter().enumerate() {
                println!("  Kelurahan ({})   : {} kelurahan tersedia", i + 1, count);
            }
        }
        Err(e) => eprintln!("  {} {}", "✘".red(), e),
    }

    println!("{}", "─".repeat(48).red());
    println!("  TOTAL KELURAHAN : {} kelurahan", dataset.subdistrict_count());
    println!();
}

fn cmd_about() {
    println!();
    println!("{}", "TENTANG TOOLS".blue().bold());
    println!("{}", "─".repeat(48).red());
    println!("  Nama     : Surabaya NIK Checker");
    println!("  Fungsi   : Validasi NIK wilayah Surabaya (kode 3578)");
    println!("  Database : kecamatan/surabaya_kecamatan.json");
    println!("             kelurahan/surabaya_kelurahan.json");
    println!("             kelurahan/surabaya_kelurahan2.json");
    println!("  Catatan  : Gunakan dengan bijak");
    println!("{}", "─".repeat(48).red());
    println!();
}

fn cmd_menu(args: InfoArgs, config: &NikConfig) {
    let dataset = load_dataset(&data_dir(args.data_dir, config));

    println!("{}", BANNER.red());
    println!("{}", "          NIK CHECKER KOTA SURABAYA".blue().bold());

    let stdin = io::stdin();
    loop {
        println!();
        println!("{}", "MENU UTAMA".blue().bold());
        println!("  [1] ▶ CEK NIK SURABAYA");
        println!("  [2] ▶ INFORMASI DATABASE");
        println!("  [3] ▶ TENTANG TOOLS");
        println!("  [0] ▶ KELUAR");
        print!("{} ", "└──╼ $".red());
        let _ = io::stdout().flush();

        let mut choice = String::new();
        if stdin.lock().read_line(&mut choice).is_err() {
            break;
        }

        match choice.trim() {
            "1" => {
                print!("{} ", "Masukkan NIK (16 digit):".blue());
                let _ = io::stdout().flush();
                let mut nik = String::new();
                if stdin.lock().read_line(&mut nik).is_err() {
                    break;
                }
                check_and_render(&dataset, nik.trim());
            }
            "2" => render_info(&dataset),
            "3" => cmd_about(),
            "0" | "" => {
                println!("\n{}\n", "SAMPAI JUMPA!".blue().bold());
                break;
            }
            other => println!("{} pilihan tidak dikenal: {}", "✘".red(), other),
        }
    }
}
