use super::render::{print_messages, render_index, render_page, Message};
use super::setup::AppContext;
use pokepager::error::Result;
use pokepager::pager::PageView;
use tracing::debug;

pub async fn page(ctx: &AppContext, number: u64) -> Result<()> {
    let mut session = ctx.open_session().await?;
    let page_number = usize::try_from(number).unwrap_or(usize::MAX);
    session.pager.seek(page_number).await?;
    if session.pager.page_number() != page_number {
        debug!(
            requested = page_number,
            shown = session.pager.page_number(),
            "page clamped to last page"
        );
    }

    let view = PageView::from(&session.pager);
    let fallback = session.pager.index().is_fallback();
    println!("{}", render_page(&view, fallback, false, &ctx.render));
    Ok(())
}

pub async fn index(ctx: &AppContext) -> Result<()> {
    let session = ctx.open_session().await?;
    print!(
        "{}",
        render_index(session.pager.index(), &session.source, &ctx.render)
    );
    Ok(())
}

pub fn config(ctx: &AppContext, write: bool) -> Result<()> {
    if write {
        ctx.config.save(&ctx.config_path)?;
        print_messages(&[Message::success(format!(
            "Configuration written to {}",
            ctx.config_path.display()
        ))]);
    } else {
        println!("{}", serde_json::to_string_pretty(&ctx.config)?);
    }
    Ok(())
}
