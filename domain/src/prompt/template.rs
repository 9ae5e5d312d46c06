//! Prompt template for sentiment analysis

use crate::core::keyword::Keyword;
use crate::search::SearchResult;

/// Builds the single prompt sent to every analysis provider
pub struct PromptTemplate;

impl PromptTemplate {
    /// Persona line that opens every prompt
    pub fn analyst_persona() -> &'static str {
        "あなたはSNSやニュースの空気感を分析する専門家です。"
    }

    /// Context block: numbered search results, or a knowledge-based
    /// instruction when search produced nothing
    pub fn context(keyword: &Keyword, results: &[SearchResult]) -> String {
        if results.is_empty() {
            return format!(
                "「{}」というキーワードについて、現在のインターネット上の評判・空気感を分析してください。あなたの知識に基づいて、最新のトレンドや話題を考慮して回答してください。",
                keyword
            );
        }

        let mut context = format!("以下は「{}」に関する最新のWeb検索結果です:\n\n", keyword);
        for (i, result) in results.iter().enumerate() {
            context.push_str(&format!(
                "{}. {}\n   {}\n\n",
                i + 1,
                result.title,
                result.snippet
            ));
        }
        context
    }

    /// Fixed structured-output instructions: fields, ranges, language, tone
    pub fn output_instructions() -> &'static str {
        r#"以下のJSON形式で回答してください。JSON以外のテキストは含めないでください:
{
  "positive": <ポジティブな感情の割合 0-100の整数>,
  "negative": <ネガティブな感情の割合 0-100の整数>,
  "neutral": <中立的な感情の割合 0-100の整数>,
  "hasControversial": <炎上・大きな論争があるかどうか true/false>,
  "rootCause": "<感情の主な原因を1文で要約。日本語で。例: サーバーダウンの報告が相次いでいるため>",
  "highlightedEvent": "<天候判定の決定打となった具体的な事象を1つピックアップして2〜3文で解説。例: 『〇〇』という発言がSNSで拡散され、賛否両論を呼んでいます。特に〜という点が批判されています。>",
  "forecasterMessage": "<ニュースキャスター風の天気予報コメントを日本語で。例: 本日は『待望のアップデート』高気圧に覆われ、界隈は一日中快晴となるでしょう！>"
}

注意:
- positive + negative + neutral = 100 になるようにしてください
- forecasterMessage は天気予報士が話すような口調で、キーワードに関連する具体的な出来事を交えてください
- highlightedEvent は具体的なニュースや話題を特定して深掘りしてください"#
    }

    /// Full analysis prompt for a keyword
    pub fn sentiment_prompt(keyword: &Keyword, results: &[SearchResult]) -> String {
        format!(
            "{}\n\n{}\n\n{}",
            Self::analyst_persona(),
            Self::context(keyword, results),
            Self::output_instructions()
        )
    }
}
