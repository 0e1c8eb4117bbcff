// Colored terminal output for keyword distributions and category counts.

use colored::Colorize;

use crate::keywords::summarizer::KeywordDistribution;

const BAR_WIDTH: usize = 20;

/// Render a share in [0, 1] as a fixed-width text bar.
pub fn share_bar(share: f64) -> String {
    let filled = (share.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    let empty = BAR_WIDTH.saturating_sub(filled);
    format!("[{}{}]", "=".repeat(filled), " ".repeat(empty))
}

/// Display a keyword distribution as a ranked bar list.
pub fn display_distribution(category: &str, distribution: &KeywordDistribution) {
    if distribution.is_empty() {
        println!("No keywords found for category '{category}'.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Top {} keywords in {category} ===", distribution.len()).bold()
    );
    println!();

    for (i, entry) in distribution.entries().iter().enumerate() {
        let bar = share_bar(entry.relative_share);
        let colored_bar = if entry.relative_share >= 0.25 {
            bar.bright_green()
        } else if entry.relative_share >= 0.10 {
            bar.bright_yellow()
        } else {
            bar.bright_blue()
        };

        println!(
            "  {:>2}. {:<28} {} {:.3} ({})",
            i + 1,
            super::truncate_chars(&entry.token, 25).bold(),
            colored_bar,
            entry.relative_share,
            entry.count
        );
    }
    println!();
}

/// Display how many enrichment rows each category has.
pub fn display_category_counts(counts: &[(String, usize)]) {
    if counts.is_empty() {
        return;
    }
    println!("{}", "Enriched categories:".bold());
    for (category, count) in counts {
        println!("  {:<24} {}", category, count.to_string().dimmed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_bar_bounds() {
        assert_eq!(share_bar(0.0), format!("[{}]", " ".repeat(BAR_WIDTH)));
        assert_eq!(share_bar(1.0), format!("[{}]", "=".repeat(BAR_WIDTH)));
        assert_eq!(share_bar(1.7), share_bar(1.0));
        assert_eq!(share_bar(0.5).matches('=').count(), BAR_WIDTH / 2);
    }
}
