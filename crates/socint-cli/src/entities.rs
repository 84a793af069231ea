//! `list` and `show` command handlers.

use anyhow::Context;

use socint_app::Session;
use socint_core::EntityKind;
use socint_store::{BrandFilter, CampaignFilter, ContentFilter};

pub(crate) struct ListArgs {
    pub search: String,
    pub status: Option<String>,
    pub category: Option<String>,
    pub platform: Option<String>,
    pub content_type: Option<String>,
}

impl ListArgs {
    fn reject_foreign_flags(&self, kind: EntityKind) -> anyhow::Result<()> {
        if self.category.is_some() && kind != EntityKind::Brand {
            anyhow::bail!("--category only applies to brands");
        }
        if (self.platform.is_some() || self.content_type.is_some()) && kind != EntityKind::Content
        {
            anyhow::bail!("--platform/--content-type only apply to content");
        }
        Ok(())
    }
}

pub(crate) fn run_list(session: &Session, kind: EntityKind, args: &ListArgs) -> anyhow::Result<()> {
    args.reject_foreign_flags(kind)?;

    match kind {
        EntityKind::Campaign => {
            let filter = CampaignFilter {
                search: args.search.clone(),
                status: args.status.as_deref().map(str::parse).transpose()?,
            };
            let campaigns = session.campaigns.list(&filter);
            println!(
                "{:<16} {:<30} {:<18} {:<10} posts",
                "ID", "NAME", "TYPE", "STATUS"
            );
            for c in &campaigns {
                println!(
                    "{:<16} {:<30} {:<18} {:<10} {}",
                    c.id,
                    c.name,
                    c.kind.to_string(),
                    c.status.to_string(),
                    c.post_urls.len()
                );
            }
            println!("{} campaign(s)", campaigns.len());
        }
        EntityKind::Brand => {
            let filter = BrandFilter {
                search: args.search.clone(),
                status: args.status.as_deref().map(str::parse).transpose()?,
                category: args.category.clone(),
            };
            let brands = session.brands.list(&filter);
            println!(
                "{:<16} {:<30} {:<14} {:<10} competitors",
                "ID", "NAME", "CATEGORY", "STATUS"
            );
            for b in &brands {
                println!(
                    "{:<16} {:<30} {:<14} {:<10} {}",
                    b.id,
                    b.name,
                    b.category,
                    b.status.to_string(),
                    b.competitors.len()
                );
            }
            println!("{} brand(s)", brands.len());
        }
        EntityKind::Content => {
            let filter = ContentFilter {
                search: args.search.clone(),
                status: args.status.as_deref().map(str::parse).transpose()?,
                platform: args.platform.clone(),
                content_type: args.content_type.as_deref().map(str::parse).transpose()?,
            };
            let contents = session.contents.list(&filter);
            println!(
                "{:<16} {:<38} {:<10} {:<8} {:<10} author",
                "ID", "TITLE", "PLATFORM", "TYPE", "STATUS"
            );
            for c in &contents {
                println!(
                    "{:<16} {:<38} {:<10} {:<8} {:<10} {}",
                    c.id,
                    c.title,
                    c.platform,
                    c.content_type.to_string(),
                    c.status.to_string(),
                    c.author
                );
            }
            println!("{} content item(s)", contents.len());
        }
    }

    Ok(())
}

pub(crate) fn run_show(session: &Session, kind: EntityKind, id: &str) -> anyhow::Result<()> {
    let entity = session
        .find_entity(kind, id)
        .with_context(|| format!("no {kind} with id '{id}'"))?;
    println!("{}", serde_json::to_string_pretty(&entity)?);
    Ok(())
}
