use anyhow::Result;
use dioxus::prelude::*;

/// Writes `text` to the system clipboard through the webview.
pub async fn copy_text(text: &str) -> Result<()> {
    let eval = document::eval(
        r#"
        const text = await dioxus.recv();
        await navigator.clipboard.writeText(text);
        return true;
        "#,
    );
    eval.send(text)?;
    eval.join::<bool>().await?;
    Ok(())
}
