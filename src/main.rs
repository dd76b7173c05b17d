//! Sprite codec CLI - Encode and verify palette-indexed animations.

use std::fs;
use std::path::PathBuf;

use sprite_codec::{
    EncodedAnimation, EncodingMode,
    source::load_frames,
    verify::verify,
};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <animation.c> [options]", args[0]);
        eprintln!();
        eprintln!("Encode a 12-frame palette animation into opcode streams.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  animation.c      Animation source file (frame0[]..frame11[] arrays)");
        eprintln!();
        eprintln!("Options:");
        eprintln!("  --delta          Use delta frame encoding (default: baseline RLE)");
        eprintln!("  --verify         Verify round trip only, write no output");
        eprintln!("  -o <path>        Write the encoded container file");
        eprintln!("  --report <path>  Write the verification report as JSON");
        std::process::exit(1);
    }

    let source_path = PathBuf::from(&args[1]);
    let mut mode = EncodingMode::Baseline;
    let mut verify_only = false;
    let mut output: Option<PathBuf> = None;
    let mut report_path: Option<PathBuf> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--delta" => mode = EncodingMode::Delta,
            "--verify" => verify_only = true,
            "-o" => {
                i += 1;
                output = args.get(i).map(PathBuf::from);
                if output.is_none() {
                    eprintln!("-o requires a path");
                    std::process::exit(1);
                }
            }
            "--report" => {
                i += 1;
                report_path = args.get(i).map(PathBuf::from);
                if report_path.is_none() {
                    eprintln!("--report requires a path");
                    std::process::exit(1);
                }
            }
            other => {
                eprintln!("Unknown option: {}", other);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let source = fs::read_to_string(&source_path).unwrap_or_else(|e| {
        eprintln!("Error reading animation source: {}", e);
        std::process::exit(1);
    });

    let frames = load_frames(&source).unwrap_or_else(|e| {
        eprintln!("Error parsing animation source: {}", e);
        std::process::exit(1);
    });

    println!(
        "Parsed {} frames, {} pixels each",
        frames.len(),
        frames[0].len()
    );

    let report = verify(&frames, mode).unwrap_or_else(|e| {
        eprintln!("Encoding failed: {}", e);
        std::process::exit(1);
    });

    for frame in &report.frames {
        let kind = if mode == EncodingMode::Delta && frame.frame > 0 {
            "delta"
        } else {
            "baseline"
        };
        println!(
            "Frame {:2} ({}): 4096 pixels -> {} opcodes ({}% reduction){}",
            frame.frame,
            kind,
            frame.stream_len,
            frame.reduction_percent(),
            if frame.is_match() {
                String::new()
            } else {
                format!(" - {} MISMATCHES", frame.mismatches)
            }
        );
    }

    println!();
    println!("{}", report);

    if let Some(path) = &report_path {
        let json = serde_json::to_string_pretty(&report).unwrap_or_else(|e| {
            eprintln!("Error serializing report: {}", e);
            std::process::exit(1);
        });
        fs::write(path, json).unwrap_or_else(|e| {
            eprintln!("Error writing report: {}", e);
            std::process::exit(1);
        });
        println!("Report written to {}", path.display());
    }

    if !report.passed() {
        eprintln!("Verification failed");
        std::process::exit(1);
    }

    if verify_only {
        return;
    }

    if let Some(path) = &output {
        let encoded = EncodedAnimation::from_frames(&frames, mode).unwrap_or_else(|e| {
            eprintln!("Encoding failed: {}", e);
            std::process::exit(1);
        });
        encoded.save(path).unwrap_or_else(|e| {
            eprintln!("Error writing container: {}", e);
            std::process::exit(1);
        });
        println!(
            "Wrote {} ({} opcode bytes, {:?} mode)",
            path.display(),
            encoded.total_len(),
            encoded.mode()
        );
    }
}
