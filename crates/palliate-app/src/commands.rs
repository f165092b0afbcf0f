//! Subcommand handlers.
//!
//! Handlers write to a caller-supplied sink so they can be driven from
//! tests with in-memory buffers.

use std::io::{self, Write};

use palliate_assistant::{AnswerMatcher, Conversation};
use palliate_core::types::{Document, Turn};
use palliate_knowledge::DocumentIndex;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

/// Shown when a search matches nothing.
pub const NO_RESULTS: &str = "ไม่พบบทความที่ตรงกับคำค้น";

/// Label in front of a document's link.
pub const OPEN_LABEL: &str = "เปิดอ่าน";

const PROMPT: &str = "> ";
const CMD_RESET: &str = "/reset";
const CMD_QUIT: &str = "/quit";

// =============================================================================
// ask / search / check
// =============================================================================

/// Answer one utterance. Blank input prints nothing.
pub fn ask(matcher: &AnswerMatcher, utterance: &str, out: &mut impl Write) -> io::Result<()> {
    let utterance = utterance.trim();
    if utterance.is_empty() {
        return Ok(());
    }
    let answer = matcher.resolve(utterance);
    writeln!(out, "{}", answer)
}

/// Print the documents matching `query`, or every document without one.
pub fn search(
    index: &DocumentIndex,
    query: Option<&str>,
    json: bool,
    out: &mut impl Write,
) -> io::Result<()> {
    let matches: Vec<&Document> = index.search(query.unwrap_or("")).collect();
    debug!(hits = matches.len(), "Search finished");

    if json {
        serde_json::to_writer_pretty(&mut *out, &matches)?;
        return writeln!(out);
    }

    if matches.is_empty() {
        return writeln!(out, "{}", NO_RESULTS);
    }
    for (i, doc) in matches.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "#{} {}", doc.id, doc.title)?;
        if !doc.summary.is_empty() {
            writeln!(out, "   {}", doc.summary)?;
        }
        if !doc.tags.is_empty() {
            let tags: Vec<String> = doc.tags.iter().map(|t| format!("#{}", t)).collect();
            writeln!(out, "   {}", tags.join(" "))?;
        }
        writeln!(out, "   {}: {}", OPEN_LABEL, index.open_url(doc))?;
    }
    Ok(())
}

/// Report what was loaded.
pub fn check(matcher: &AnswerMatcher, index: &DocumentIndex, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "rules: {}", matcher.table().len())?;
    writeln!(out, "documents: {}", index.len())?;
    writeln!(out, "ok")
}

// =============================================================================
// chat
// =============================================================================

fn render_turn(turn: &Turn) -> String {
    match &turn.link {
        Some(link) => format!("{}\n{}: {}\n", turn.text, link.label, link.url),
        None => format!("{}\n", turn.text),
    }
}

/// Interactive session over line-oriented input.
///
/// `/reset` starts a fresh conversation, `/quit` or end of input stops.
/// Returns the number of answered utterances in the last session.
pub async fn run_chat<R, W>(
    matcher: &AnswerMatcher,
    greeting: &str,
    reader: R,
    mut writer: W,
) -> io::Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut conversation = Conversation::new(greeting);
    info!(session = %conversation.id(), "Chat session started");

    if let Some(first) = conversation.turns().first() {
        writer.write_all(render_turn(first).as_bytes()).await?;
    }

    let mut lines = reader.lines();
    loop {
        writer.write_all(PROMPT.as_bytes()).await?;
        writer.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match line.trim() {
            CMD_QUIT => break,
            CMD_RESET => {
                conversation.reset();
                info!(session = %conversation.id(), "Chat session reset");
                if let Some(first) = conversation.turns().first() {
                    writer.write_all(render_turn(first).as_bytes()).await?;
                }
            }
            input => {
                if let Some(reply) = conversation.submit(matcher, input) {
                    writer.write_all(render_turn(reply).as_bytes()).await?;
                }
            }
        }
    }

    writer.flush().await?;
    info!(
        session = %conversation.id(),
        exchanges = conversation.exchanges(),
        "Chat session ended"
    );
    Ok(conversation.exchanges())
}

#[cfg(test)]
mod tests {
    use super::*;
    use palliate_core::config::{AssistantConfig, KnowledgeConfig};

    fn matcher() -> AnswerMatcher {
        AnswerMatcher::from_config(&AssistantConfig::default()).unwrap()
    }

    fn index() -> DocumentIndex {
        DocumentIndex::from_config(&KnowledgeConfig::default()).unwrap()
    }

    fn run_search(query: Option<&str>, json: bool) -> String {
        let mut out = Vec::new();
        search(&index(), query, json, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    // ---- ask ----

    #[test]
    fn test_ask_known_topic() {
        let mut out = Vec::new();
        ask(&matcher(), "ผู้ป่วยปวดมาก", &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("บันทึกระดับปวด"));
    }

    #[test]
    fn test_ask_fallback_prints_link() {
        let mut out = Vec::new();
        ask(&matcher(), "zzz qqq", &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("คลิก: https://chatgpt.com/"));
    }

    #[test]
    fn test_ask_blank_prints_nothing() {
        let mut out = Vec::new();
        ask(&matcher(), "   ", &mut out).unwrap();
        assert!(out.is_empty());
    }

    // ---- search ----

    #[test]
    fn test_search_all_lists_every_document() {
        let text = run_search(None, false);
        for id in 1..=4 {
            assert!(text.contains(&format!("#{} ", id)));
        }
        assert!(text.contains("#dyspnea"));
        assert!(text.contains(&format!("{}: https://drive.google.com/", OPEN_LABEL)));
    }

    #[test]
    fn test_search_no_results() {
        assert_eq!(run_search(Some("chemotherapy"), false), format!("{}\n", NO_RESULTS));
    }

    #[test]
    fn test_search_json() {
        let text = run_search(Some("dyspnea"), true);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let arr = value.as_array().unwrap();
        assert_eq!(arr.len(), 1);
        assert_eq!(arr[0]["id"], 2);
    }

    #[test]
    fn test_search_json_no_results_is_empty_array() {
        let text = run_search(Some("chemotherapy"), true);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(value.as_array().unwrap().is_empty());
    }

    // ---- check ----

    #[test]
    fn test_check_reports_counts() {
        let mut out = Vec::new();
        check(&matcher(), &index(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("documents: 4"));
        assert!(text.ends_with("ok\n"));
    }

    // ---- chat ----

    async fn chat(input: &str) -> (usize, String) {
        let mut out = Vec::new();
        let n = run_chat(&matcher(), "hello", input.as_bytes(), &mut out)
            .await
            .unwrap();
        (n, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_chat_greets_and_answers() {
        let (n, text) = chat("ผู้ป่วยปวดมาก\n").await;
        assert_eq!(n, 1);
        assert!(text.starts_with("hello\n"));
        assert!(text.contains("บันทึกระดับปวด"));
    }

    #[tokio::test]
    async fn test_chat_skips_blank_lines() {
        let (n, _) = chat("\n   \n").await;
        assert_eq!(n, 0);
    }

    #[tokio::test]
    async fn test_chat_quit_stops_reading() {
        let (n, text) = chat("/quit\nผู้ป่วยปวดมาก\n").await;
        assert_eq!(n, 0);
        assert!(!text.contains("บันทึกระดับปวด"));
    }

    #[tokio::test]
    async fn test_chat_reset_starts_new_session() {
        let (n, text) = chat("ผู้ป่วยปวดมาก\n/reset\n").await;
        assert_eq!(n, 0);
        assert_eq!(text.matches("hello\n").count(), 2);
    }

    #[tokio::test]
    async fn test_chat_fallback_includes_link() {
        let (_, text) = chat("zzz qqq").await;
        assert!(text.contains("คลิก: https://chatgpt.com/"));
    }
}
