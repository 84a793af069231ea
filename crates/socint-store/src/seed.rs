//! Seed data: the built-in demo dataset and the optional YAML seed file.
//!
//! The demo dataset plays the role of a real analytics backend for the
//! presentational core. Series are generated without randomness (same
//! output for a given day) and cover the 30 days up to today, so a freshly
//! opened analysis view has data inside its default date range.

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use socint_core::{
    AnalysisResult, Audience, Brand, BrandStatus, Campaign, CampaignKind, CampaignStatus,
    CompetitorInsight, Content, ContentStatus, ContentType, Demographics, Emotions,
    EngagementPatterns, EntityKind, Interest, Metrics, SentimentScore, ShareBucket,
    TimeSeriesPoint, Topic,
};

use crate::fixtures::{FixtureSet, SeriesFixture};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse seed file: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid seed data: {0}")]
    Validation(String),
}

/// Everything the stores and the fixture repository are seeded with.
#[derive(Debug, Clone)]
pub struct SeedData {
    pub campaigns: Vec<Campaign>,
    pub brands: Vec<Brand>,
    pub contents: Vec<Content>,
    pub fixtures: FixtureSet,
}

/// On-disk seed file shape. Entity lists may be omitted; the fixture tables
/// may not, since the fallback policy needs a first record.
#[derive(Debug, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub campaigns: Vec<Campaign>,
    #[serde(default)]
    pub brands: Vec<Brand>,
    #[serde(default)]
    pub contents: Vec<Content>,
    pub analyses: Vec<AnalysisResult>,
    pub series: Vec<SeriesFixture>,
}

/// Load and validate a YAML seed file.
///
/// # Errors
///
/// Returns `SeedError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_seed(path: &Path) -> Result<SeedData, SeedError> {
    let content = std::fs::read_to_string(path).map_err(|e| SeedError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: SeedFile = serde_yaml::from_str(&content)?;
    validate_seed(&file)?;

    let fixtures = FixtureSet::new(file.analyses, file.series)
        .map_err(|e| SeedError::Validation(e.to_string()))?;
    Ok(SeedData {
        campaigns: file.campaigns,
        brands: file.brands,
        contents: file.contents,
        fixtures,
    })
}

fn validate_seed(file: &SeedFile) -> Result<(), SeedError> {
    let mut entity_ids = std::collections::HashSet::new();
    let all_ids = file
        .campaigns
        .iter()
        .map(|c| c.id.as_str())
        .chain(file.brands.iter().map(|b| b.id.as_str()))
        .chain(file.contents.iter().map(|c| c.id.as_str()));
    for id in all_ids {
        if id.trim().is_empty() {
            return Err(SeedError::Validation(
                "entity ids must be non-empty".to_string(),
            ));
        }
        if !entity_ids.insert(id) {
            return Err(SeedError::Validation(format!("duplicate entity id: '{id}'")));
        }
    }

    for analysis in &file.analyses {
        if !entity_ids.contains(analysis.entity_id.as_str()) {
            return Err(SeedError::Validation(format!(
                "analysis '{}' references unknown entity '{}'",
                analysis.id, analysis.entity_id
            )));
        }
    }

    let mut series_ids = std::collections::HashSet::new();
    for series in &file.series {
        if !entity_ids.contains(series.entity_id.as_str()) {
            return Err(SeedError::Validation(format!(
                "series references unknown entity '{}'",
                series.entity_id
            )));
        }
        if !series_ids.insert(series.entity_id.as_str()) {
            return Err(SeedError::Validation(format!(
                "duplicate series for entity '{}'",
                series.entity_id
            )));
        }
    }

    Ok(())
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    // All literals below are valid calendar dates.
    NaiveDate::from_ymd_opt(y, m, d).expect("valid demo date")
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Deterministic 30-day series: a short wobble cycle around `base`
/// sentiment, with the positive/negative split derived from each day's
/// sentiment the same way the daily rollup would produce it.
fn build_series(entity_id: &str, start: NaiveDate, base: f64) -> SeriesFixture {
    let points = (0..30u32)
        .map(|i| {
            let wobble = f64::from(i % 7) - 3.0;
            let sentiment = (base + wobble).clamp(0.0, 100.0);
            let mentions = u64::from(600 + (i * 37) % 400);
            let engagement = 8.0 + f64::from(i % 5);
            let positive = sentiment.floor();
            let negative = ((1.0 - sentiment / 100.0) * 60.0).floor();
            let neutral = 100.0 - positive - negative;
            TimeSeriesPoint {
                date: start + chrono::Duration::days(i64::from(i)),
                sentiment,
                mentions,
                engagement,
                positive,
                negative,
                neutral,
            }
        })
        .collect();
    SeriesFixture {
        entity_id: entity_id.to_string(),
        points,
    }
}

fn demo_campaigns() -> Vec<Campaign> {
    vec![
        Campaign {
            id: "camp_001".to_string(),
            name: "Orion Launch Campaign".to_string(),
            description: "Tracks public reception of the Aurora Orion pickup launch".to_string(),
            post_urls: strings(&[
                "https://twitter.com/auroramotors/status/18442",
                "https://youtube.com/watch?v=orion_reveal",
                "https://reddit.com/r/auroramotors/orion_first_drive",
            ]),
            kind: CampaignKind::ProductLaunch,
            status: CampaignStatus::Active,
            created_date: day(2026, 6, 10),
            start_date: Some(day(2026, 6, 15)),
            end_date: Some(day(2026, 8, 31)),
            target_audience: strings(&["Tech Enthusiasts", "Truck Owners", "EV Adopters"]),
            platforms: strings(&["Twitter/X", "YouTube", "Reddit", "Instagram"]),
        },
        Campaign {
            id: "camp_002".to_string(),
            name: "Home Charging Awareness".to_string(),
            description: "Monitors sentiment around the home charging bundle announcement"
                .to_string(),
            post_urls: strings(&[
                "https://twitter.com/auroramotors/status/19020",
                "https://linkedin.com/posts/aurora-home-charging",
            ]),
            kind: CampaignKind::BrandAwareness,
            status: CampaignStatus::Active,
            created_date: day(2026, 5, 25),
            start_date: Some(day(2026, 6, 1)),
            end_date: Some(day(2026, 9, 15)),
            target_audience: strings(&["Homeowners", "Current Owners"]),
            platforms: strings(&["Twitter/X", "LinkedIn"]),
        },
    ]
}

fn demo_brands() -> Vec<Brand> {
    vec![
        Brand {
            id: "brand_001".to_string(),
            name: "Aurora Motors".to_string(),
            description: "Main Aurora brand monitoring across vehicle lines and corporate news"
                .to_string(),
            post_urls: strings(&[
                "https://twitter.com/auroramotors",
                "https://instagram.com/auroramotors",
                "https://youtube.com/auroramotors",
                "https://linkedin.com/company/aurora-motors",
            ]),
            keywords: strings(&["aurora", "electric vehicle", "ev", "orion", "polaris"]),
            category: "Automotive".to_string(),
            status: BrandStatus::Active,
            created_date: day(2026, 1, 1),
            competitors: strings(&["Volt Co", "Ion Labs", "Meridian EV"]),
        },
        Brand {
            id: "brand_002".to_string(),
            name: "Aurora Energy".to_string(),
            description: "Aurora home battery and solar product lines".to_string(),
            post_urls: strings(&[
                "https://twitter.com/auroraenergy",
                "https://linkedin.com/showcase/aurora-energy",
            ]),
            keywords: strings(&["aurora energy", "home battery", "solar", "storage"]),
            category: "Energy".to_string(),
            status: BrandStatus::Active,
            created_date: day(2026, 1, 1),
            competitors: strings(&["SunGrid", "Helios Power"]),
        },
    ]
}

fn demo_contents() -> Vec<Content> {
    vec![
        Content {
            id: "content_001".to_string(),
            title: "Orion First Deliveries Recap".to_string(),
            description: "Official video covering the first Orion customer deliveries".to_string(),
            post_url: "https://youtube.com/watch?v=orion_deliveries".to_string(),
            platform: "YouTube".to_string(),
            content_type: ContentType::Video,
            author: "Aurora Motors".to_string(),
            created_date: day(2026, 6, 20),
            publish_date: Some(day(2026, 6, 20)),
            status: ContentStatus::Published,
            tags: strings(&["orion", "delivery", "launch"]),
        },
        Content {
            id: "content_002".to_string(),
            title: "Road-Trip Review: 2,000 km in the Orion".to_string(),
            description: "Long-form owner review from the first delivery batch".to_string(),
            post_url: "https://reddit.com/r/auroramotors/orion_road_trip".to_string(),
            platform: "Reddit".to_string(),
            content_type: ContentType::Post,
            author: "u/gridrunner".to_string(),
            created_date: day(2026, 6, 28),
            publish_date: Some(day(2026, 6, 27)),
            status: ContentStatus::Published,
            tags: strings(&["orion", "review", "road trip"]),
        },
    ]
}

#[allow(clippy::too_many_lines)] // one literal record per analyzed entity
fn demo_analyses() -> Vec<AnalysisResult> {
    vec![
        AnalysisResult {
            id: "analysis_001".to_string(),
            entity_id: "camp_001".to_string(),
            entity_kind: EntityKind::Campaign,
            analysis_date: day(2026, 7, 30),
            sentiment: SentimentScore {
                overall_score: 0.68,
                positive: 42.0,
                negative: 28.0,
                neutral: 30.0,
                confidence: 0.89,
            },
            topics: vec![
                Topic {
                    topic: "Delivery Timeline".to_string(),
                    relevance: 0.85,
                    mentions: 1200,
                    sentiment: 0.65,
                },
                Topic {
                    topic: "Design & Styling".to_string(),
                    relevance: 0.78,
                    mentions: 980,
                    sentiment: 0.72,
                },
                Topic {
                    topic: "Range & Performance".to_string(),
                    relevance: 0.73,
                    mentions: 850,
                    sentiment: 0.81,
                },
                Topic {
                    topic: "Pricing Concerns".to_string(),
                    relevance: 0.69,
                    mentions: 720,
                    sentiment: 0.45,
                },
            ],
            emotions: Emotions {
                joy: 0.32,
                anger: 0.18,
                fear: 0.12,
                sadness: 0.08,
                surprise: 0.25,
                trust: 0.38,
                anticipation: 0.45,
                disgust: 0.09,
            },
            audience: Audience {
                demographics: Demographics {
                    age_groups: vec![
                        bucket("25-34", 35.0),
                        bucket("35-44", 28.0),
                        bucket("45-54", 22.0),
                        bucket("18-24", 15.0),
                    ],
                    genders: vec![
                        bucket("Male", 72.0),
                        bucket("Female", 26.0),
                        bucket("Other", 2.0),
                    ],
                    locations: vec![
                        bucket("United States", 45.0),
                        bucket("Germany", 15.0),
                        bucket("Canada", 12.0),
                        bucket("United Kingdom", 10.0),
                        bucket("Other", 18.0),
                    ],
                },
                engagement_patterns: EngagementPatterns {
                    peak_hours: strings(&["9:00 AM", "1:00 PM", "7:00 PM"]),
                    active_days: strings(&["Monday", "Wednesday", "Friday"]),
                    engagement_rate: 11.2,
                },
                interests: vec![
                    interest("Electric Vehicles", 0.92),
                    interest("Technology", 0.85),
                    interest("Automotive", 0.78),
                ],
            },
            metrics: Metrics {
                total_mentions: 38_500,
                reach: 2_800_000,
                impressions: 4_200_000,
                engagement_rate: 11.2,
                share_rate: 3.4,
                click_rate: 2.8,
                conversion_rate: 1.2,
            },
            competitive_insights: vec![
                CompetitorInsight {
                    competitor: "Volt Co Hauler".to_string(),
                    mention_share: 0.35,
                    sentiment_comparison: -0.15,
                    key_differences: strings(&["Price point", "Availability"]),
                },
                CompetitorInsight {
                    competitor: "Ion Labs R2".to_string(),
                    mention_share: 0.25,
                    sentiment_comparison: -0.08,
                    key_differences: strings(&["Adventure focus", "Startup perception"]),
                },
            ],
        },
        AnalysisResult {
            id: "analysis_002".to_string(),
            entity_id: "brand_001".to_string(),
            entity_kind: EntityKind::Brand,
            analysis_date: day(2026, 7, 30),
            sentiment: SentimentScore {
                overall_score: 0.73,
                positive: 48.0,
                negative: 24.0,
                neutral: 28.0,
                confidence: 0.92,
            },
            topics: vec![
                Topic {
                    topic: "Innovation".to_string(),
                    relevance: 0.92,
                    mentions: 3200,
                    sentiment: 0.81,
                },
                Topic {
                    topic: "Sustainability".to_string(),
                    relevance: 0.87,
                    mentions: 2800,
                    sentiment: 0.78,
                },
                Topic {
                    topic: "Customer Service".to_string(),
                    relevance: 0.71,
                    mentions: 1900,
                    sentiment: 0.58,
                },
                Topic {
                    topic: "Build Quality".to_string(),
                    relevance: 0.82,
                    mentions: 2400,
                    sentiment: 0.74,
                },
            ],
            emotions: Emotions {
                joy: 0.38,
                anger: 0.15,
                fear: 0.09,
                sadness: 0.06,
                surprise: 0.22,
                trust: 0.45,
                anticipation: 0.42,
                disgust: 0.07,
            },
            audience: Audience {
                demographics: Demographics {
                    age_groups: vec![
                        bucket("25-34", 32.0),
                        bucket("35-44", 31.0),
                        bucket("45-54", 25.0),
                        bucket("18-24", 12.0),
                    ],
                    genders: vec![
                        bucket("Male", 68.0),
                        bucket("Female", 30.0),
                        bucket("Other", 2.0),
                    ],
                    locations: vec![
                        bucket("United States", 42.0),
                        bucket("China", 18.0),
                        bucket("Germany", 12.0),
                        bucket("Other", 28.0),
                    ],
                },
                engagement_patterns: EngagementPatterns {
                    peak_hours: strings(&["8:00 AM", "12:00 PM", "6:00 PM"]),
                    active_days: strings(&["Tuesday", "Wednesday", "Thursday"]),
                    engagement_rate: 13.7,
                },
                interests: vec![
                    interest("Electric Vehicles", 0.95),
                    interest("Technology", 0.89),
                    interest("Environment", 0.82),
                ],
            },
            metrics: Metrics {
                total_mentions: 125_000,
                reach: 8_500_000,
                impressions: 12_800_000,
                engagement_rate: 13.7,
                share_rate: 4.2,
                click_rate: 3.1,
                conversion_rate: 1.8,
            },
            competitive_insights: vec![
                CompetitorInsight {
                    competitor: "Volt Co".to_string(),
                    mention_share: 0.45,
                    sentiment_comparison: 0.15,
                    key_differences: strings(&["Mass market appeal", "Dealer network"]),
                },
                CompetitorInsight {
                    competitor: "Meridian EV".to_string(),
                    mention_share: 0.32,
                    sentiment_comparison: 0.08,
                    key_differences: strings(&["Luxury positioning", "Premium pricing"]),
                },
            ],
        },
        AnalysisResult {
            id: "analysis_003".to_string(),
            entity_id: "content_001".to_string(),
            entity_kind: EntityKind::Content,
            analysis_date: day(2026, 7, 30),
            sentiment: SentimentScore {
                overall_score: 0.76,
                positive: 52.0,
                negative: 18.0,
                neutral: 30.0,
                confidence: 0.87,
            },
            topics: vec![
                Topic {
                    topic: "Product Features".to_string(),
                    relevance: 0.94,
                    mentions: 2800,
                    sentiment: 0.82,
                },
                Topic {
                    topic: "Owner Experience".to_string(),
                    relevance: 0.81,
                    mentions: 1950,
                    sentiment: 0.78,
                },
                Topic {
                    topic: "Value".to_string(),
                    relevance: 0.65,
                    mentions: 1200,
                    sentiment: 0.69,
                },
            ],
            emotions: Emotions {
                joy: 0.41,
                anger: 0.12,
                fear: 0.08,
                sadness: 0.05,
                surprise: 0.28,
                trust: 0.42,
                anticipation: 0.48,
                disgust: 0.06,
            },
            audience: Audience {
                demographics: Demographics {
                    age_groups: vec![
                        bucket("25-34", 38.0),
                        bucket("35-44", 27.0),
                        bucket("18-24", 20.0),
                        bucket("45-54", 15.0),
                    ],
                    genders: vec![
                        bucket("Male", 75.0),
                        bucket("Female", 23.0),
                        bucket("Other", 2.0),
                    ],
                    locations: vec![
                        bucket("United States", 48.0),
                        bucket("Germany", 14.0),
                        bucket("Canada", 11.0),
                        bucket("Other", 27.0),
                    ],
                },
                engagement_patterns: EngagementPatterns {
                    peak_hours: strings(&["7:00 PM", "8:00 PM", "9:00 PM"]),
                    active_days: strings(&["Friday", "Saturday", "Sunday"]),
                    engagement_rate: 15.6,
                },
                interests: vec![
                    interest("Automotive", 0.94),
                    interest("Electric Vehicles", 0.91),
                    interest("Technology", 0.88),
                ],
            },
            metrics: Metrics {
                total_mentions: 8600,
                reach: 450_000,
                impressions: 680_000,
                engagement_rate: 15.6,
                share_rate: 6.2,
                click_rate: 4.3,
                conversion_rate: 2.1,
            },
            competitive_insights: vec![CompetitorInsight {
                competitor: "Legacy Auto Coverage".to_string(),
                mention_share: 0.62,
                sentiment_comparison: 0.22,
                key_differences: strings(&["Innovation focus", "Community reach"]),
            }],
        },
    ]
}

fn bucket(label: &str, percentage: f64) -> ShareBucket {
    ShareBucket {
        label: label.to_string(),
        percentage,
    }
}

fn interest(name: &str, affinity: f64) -> Interest {
    Interest {
        interest: name.to_string(),
        affinity,
    }
}

/// The built-in demo dataset.
///
/// The first analysis record and the first series (both for `camp_001`) are
/// the designated fallback records for unknown ids.
#[must_use]
pub fn demo() -> SeedData {
    let start = socint_core::ids::today() - chrono::Duration::days(29);
    let series = vec![
        build_series("camp_001", start, 68.0),
        build_series("camp_002", start, 72.0),
        build_series("brand_001", start, 73.0),
        build_series("brand_002", start, 78.0),
        build_series("content_001", start, 76.0),
        build_series("content_002", start, 69.0),
    ];
    // Both tables are statically non-empty.
    let fixtures =
        FixtureSet::new(demo_analyses(), series).expect("demo fixture tables are non-empty");
    SeedData {
        campaigns: demo_campaigns(),
        brands: demo_brands(),
        contents: demo_contents(),
        fixtures,
    }
}
