//! `analyze` and `trend` command handlers.

use anyhow::Context;
use chrono::NaiveDate;

use socint_analytics::Trend;
use socint_app::{AnalysisBundle, Session};
use socint_core::EntityKind;

pub(crate) fn run_analyze(
    session: &mut Session,
    kind: EntityKind,
    id: &str,
    range: Option<(&str, &str)>,
    json: bool,
) -> anyhow::Result<()> {
    session.select(kind, id)?;

    if let Some((start, end)) = range {
        let start = parse_date(start)?;
        let end = parse_date(end)?;
        session
            .filter_mut()
            .context("analysis filter not initialized")?
            .set_date_range(start, end)?;
    }

    let bundle = session.analysis().context("analysis view not available")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&bundle)?);
        return Ok(());
    }
    print_bundle(&bundle);
    Ok(())
}

pub(crate) fn run_trend(
    session: &mut Session,
    kind: EntityKind,
    id: &str,
    field: Option<&str>,
) -> anyhow::Result<()> {
    session.select(kind, id)?;
    let bundle = session.analysis().context("analysis view not available")?;

    let rows: Vec<(&str, Trend)> = match field {
        Some("sentiment") => vec![("sentiment", bundle.trends.sentiment)],
        Some("mentions") => vec![("mentions", bundle.trends.mentions)],
        Some("engagement") => vec![("engagement", bundle.trends.engagement)],
        Some(other) => anyhow::bail!(
            "unknown trend field '{other}': expected sentiment, mentions, or engagement"
        ),
        None => vec![
            ("sentiment", bundle.trends.sentiment),
            ("mentions", bundle.trends.mentions),
            ("engagement", bundle.trends.engagement),
        ],
    };

    println!("{} — trends over the filtered series", bundle.entity_label);
    for (name, value) in rows {
        println!("  {name:<12} {}", format_trend(value));
    }
    Ok(())
}

fn parse_date(text: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .with_context(|| format!("invalid date '{text}': expected YYYY-MM-DD"))
}

fn format_trend(trend: Trend) -> String {
    match trend {
        Trend::Percent(p) => format!("{p:+.1}%"),
        Trend::Undefined => "n/a".to_string(),
    }
}

fn print_bundle(bundle: &AnalysisBundle) {
    println!("{} — {} analysis", bundle.entity_label, bundle.entity_kind);
    println!("analysis date: {}", bundle.analysis_date);
    if bundle.analysis_fallback {
        println!("note: no analysis fixture for this entity; showing the default record");
    }
    if bundle.series_fallback {
        println!("note: no series fixture for this entity; showing the default series");
    }

    println!();
    println!(
        "sentiment {}%   mentions {}   engagement {}%   reach {}M",
        bundle.kpis.overall_sentiment_percent,
        bundle.kpis.total_mentions,
        bundle.kpis.engagement_rate,
        bundle.kpis.reach_millions
    );

    println!();
    println!("Sentiment breakdown");
    println!("  positive {:>5.1}%", bundle.sentiment.positive);
    println!("  neutral  {:>5.1}%", bundle.sentiment.neutral);
    println!("  negative {:>5.1}%", bundle.sentiment.negative);

    println!();
    println!("Emotions");
    for row in &bundle.emotions {
        println!("  {:<13} {:>3}", row.emotion, row.intensity);
    }

    println!();
    println!("Topics");
    println!(
        "  {:<26} {:>8} {:>11} {:>11}",
        "TOPIC", "MENTIONS", "SENTIMENT%", "RELEVANCE%"
    );
    for row in &bundle.topics {
        println!(
            "  {:<26} {:>8} {:>11} {:>11}",
            row.topic, row.mentions, row.sentiment_percent, row.relevance_percent
        );
    }

    if !bundle.competitors.is_empty() {
        println!();
        println!("Competitive landscape");
        println!("  {:<26} {:>7} {:>10}", "COMPETITOR", "SHARE%", "SENTIMENT");
        for row in &bundle.competitors {
            println!(
                "  {:<26} {:>7} {:>10}",
                row.competitor, row.share_percent, row.normalized_sentiment
            );
        }
    }

    println!();
    println!("Conversion funnel");
    for (stage, value) in bundle.funnel.stages() {
        println!("  {stage:<12} {value}");
    }

    println!();
    println!(
        "Series: {} point(s) in range, trends sentiment {} / mentions {} / engagement {}",
        bundle.series.len(),
        format_trend(bundle.trends.sentiment),
        format_trend(bundle.trends.mentions),
        format_trend(bundle.trends.engagement)
    );

    println!();
    println!("Filter options");
    println!("  platforms: {}", join_or_dash(&bundle.filter_options.platforms));
    println!("  posts:     {}", bundle.filter_options.posts.len());
    if !bundle.filter_options.keywords.is_empty() {
        println!("  keywords:  {}", join_or_dash(&bundle.filter_options.keywords));
    }
}

fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}
