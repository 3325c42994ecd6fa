use anyhow::{Context, Result};
use rpassword::prompt_password;
use zxcvbn::zxcvbn;

use rpawogen::passgen;
use rpawogen::strength;

use crate::TestpassArgs;

// zxcvbn 评分作为第二参考
fn zxcvbn_estimate(password: &str) -> (String, u8, String) {
    let strength_result = zxcvbn(password, &[]);
    let score = strength_result.score();
    let feedback = strength_result.feedback().map_or_else(
        String::new,
        |f| f.suggestions().iter().map(|s| s.to_string()).collect::<Vec<_>>().join(" ")
    );

    let rating = match score {
        zxcvbn::Score::Zero => "Very Weak",
        zxcvbn::Score::One => "Weak",
        zxcvbn::Score::Two => "Medium",
        zxcvbn::Score::Three => "Strong",
        zxcvbn::Score::Four => "Very Strong",
        _ => "Unknown",
    }.to_string();

    (rating, score as u8, feedback)
}

pub fn test_password(args: TestpassArgs) -> Result<()> {
    let password = match args.password {
        Some(password) => password,
        None => prompt_password("Enter password to check: ").context("Failed to read password")?,
    };
    if password.is_empty() {
        anyhow::bail!("Password cannot be empty");
    }

    let report = strength::analyze(&password);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Password strength: {}", report.strength);
    println!("Length: {} characters", report.length);
    println!("Score: {}/15", report.score);
    println!("Unique characters: {}", report.unique_chars);
    println!("\nPassword composition:");
    println!("   • Lowercase letters: {}", if report.has_lowercase { "✓" } else { "✗" });
    println!("   • Uppercase letters: {}", if report.has_uppercase { "✓" } else { "✗" });
    println!("   • Digits: {}", if report.has_digits { "✓" } else { "✗" });
    println!("   • Special characters: {}", if report.has_special { "✓" } else { "✗" });

    if !report.feedback.is_empty() {
        println!("\nRecommendations:");
        for tip in &report.feedback {
            println!("   • {}", tip);
        }
    }

    let (rating, score, feedback) = zxcvbn_estimate(&password);
    println!("\nzxcvbn estimate: {} ({}/4)", rating, score);
    if !feedback.is_empty() {
        println!("Suggestions: {}", feedback);
    }

    if args.check_confusion {
        let confusing = passgen::check_confusing_chars(&password);
        if !confusing.is_empty() {
            println!("Potentially confusing characters: {:?}", confusing);
        } else {
            println!("No confusing characters detected");
        }
    }
    Ok(())
}
