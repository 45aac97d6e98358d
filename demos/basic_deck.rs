//! Basic Script Segmentation
//!
//! Splits a short narration script into slides with a toy embedder.
//!
//! ```bash
//! cargo run --example basic_deck
//! ```

use scriptdeck::{
    flagged_positions, paragraphs_from_text, LineBudget, Result, SegmenterConfig, SlideSegmenter,
};

/// Toy embedder: scripts about weather point one way, everything else another.
fn keyword_embedder(texts: &[String]) -> Result<Vec<Vec<f32>>> {
    Ok(texts
        .iter()
        .map(|t| {
            if t.contains("날씨") || t.contains("비") {
                vec![1.0, 0.1]
            } else {
                vec![0.1, 1.0]
            }
        })
        .collect())
}

fn main() -> Result<()> {
    let script = "오늘은 날씨가 정말 좋고 바람도 시원합니다. 그리고 \
        오후에는 비가 올 수도 있다고 합니다.\n\n\
        이제 본론으로 들어가서 우리 회사의 새로운 서비스를 소개하겠습니다. \
        이 서비스는 누구나 쉽게 사용할 수 있도록 만들어졌고 \
        복잡한 설정 없이도 바로 시작할 수 있습니다.";

    let paragraphs = paragraphs_from_text(script);
    let config = SegmenterConfig::new(LineBudget::new(4, 18)?).with_compaction(true);
    let slides = SlideSegmenter::new(config).segment(&paragraphs, &keyword_embedder)?;

    println!("Paragraphs: {}", paragraphs.len());
    println!("Slides: {}\n", slides.len());

    for (i, slide) in slides.iter().enumerate() {
        println!("[{}]{}", i + 1, if slide.flagged { " (needs review)" } else { "" });
        println!("{}\n", slide.text);
    }

    let flagged = flagged_positions(&slides);
    if !flagged.is_empty() {
        println!("Review slides: {:?}", flagged.iter().map(|i| i + 1).collect::<Vec<_>>());
    }

    Ok(())
}
