//! Terminal rendering of the form state.

use qrcode::{Color, QrCode};
use qrlink_core::form::FormState;
use qrlink_core::provision::Activation;

/// Print the feedback line; errors go to stderr.
pub fn print_feedback(state: &FormState) {
    if state.feedback.is_error() {
        eprintln!("{}", state.feedback.message);
    } else {
        println!("{}", state.feedback.message);
    }
}

/// Print the result area: image link, its description, and the download binding.
pub fn print_result(state: &FormState) {
    if !state.result_visible {
        return;
    }
    if let Some(image) = &state.image {
        println!("Image:    {}", image.src);
        println!("Alt:      {}", image.alt);
    }
    let dl = &state.download;
    let binding = match dl.href() {
        Some(_) if dl.is_released() => "(already saved)".to_string(),
        Some(href) if dl.is_local() => format!("{href} (local copy)"),
        Some(href) => format!("{href} (direct link)"),
        None => "-".to_string(),
    };
    println!("{}: {} -> {}", dl.label(), dl.filename().unwrap_or("-"), binding);
}

pub fn print_activation(activation: &Activation) {
    match activation {
        Activation::Saved { path, .. } => println!("Saved {}", path.display()),
        Activation::OpenRemote { url, filename } => {
            println!(
                "Could not fetch the image directly; open this link and save it as {filename}:"
            );
            println!("  {url}");
        }
        Activation::Unbound => println!("Nothing to download yet."),
    }
}

/// Draw a QR code for `data` with Unicode half blocks (two modules per character row).
pub fn print_qr_preview(data: &str) {
    let code = match QrCode::new(data.as_bytes()) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("QR preview failed: {}", e);
            eprintln!("Failed to draw QR preview: {}", e);
            return;
        }
    };

    let colors = code.to_colors();
    let width = code.width();
    let quiet = "  ";

    println!("{}{}", quiet, " ".repeat(width + 4));
    for y in (0..colors.len()).step_by(width * 2) {
        let mut line = String::with_capacity(width + 8);
        line.push_str(quiet);
        line.push_str("  ");
        for x in 0..width {
            let top = colors.get(y + x) == Some(&Color::Dark);
            let bottom = colors.get(y + width + x) == Some(&Color::Dark);
            line.push(match (top, bottom) {
                (true, true) => '\u{2588}',
                (true, false) => '\u{2580}',
                (false, true) => '\u{2584}',
                (false, false) => ' ',
            });
        }
        line.push_str("  ");
        println!("{line}");
    }
    println!("{}{}", quiet, " ".repeat(width + 4));
}
