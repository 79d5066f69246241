//! Generation Prompts
//!
//! System prompts for each generation task and the target-language lookup
//! table. Prompt text stays in the product's language (Chinese) to match
//! the content it operates on.

use prompt_studio_core::GenerationTask;

const DESCRIPTION_PROMPT: &str = "你是一个提示词管理助手。请为用户提供的提示词生成一句简洁的中文描述，\
直接输出描述文本，不要添加任何前缀或解释。";

const TAGS_PROMPT: &str = "你是一个提示词管理助手。请为用户提供的提示词生成最多5个中文标签，\
用逗号分隔，直接输出标签，不要添加任何解释。";

const ANALYSIS_PROMPT: &str = "你是一个提示词管理助手。请分析用户提供的提示词，\
说明它的用途、适用场景和使用技巧。";

const STRUCTURED_PROMPT: &str = "你是一个提示词管理助手。请为用户提供的提示词生成一句简洁的中文描述\
和最多5个中文标签。以 JSON 对象返回，格式为 {\"description\": \"...\", \"tags\": [\"...\"]}，\
不要输出 JSON 以外的任何内容。";

/// Map a language code to the name used in the translation prompt.
/// Unrecognized codes fall back to English.
pub fn language_name(code: &str) -> &'static str {
    match code {
        "zh" => "中文",
        "en" => "英文",
        "ja" => "日文",
        "ko" => "韩文",
        "fr" => "法文",
        "de" => "德文",
        "es" => "西班牙文",
        "ru" => "俄文",
        _ => "英文",
    }
}

/// The system prompt for a single-output task.
///
/// `target_language` is only consulted for translation.
pub fn system_prompt(task: GenerationTask, target_language: &str) -> String {
    match task {
        GenerationTask::Description => DESCRIPTION_PROMPT.to_string(),
        GenerationTask::Tags => TAGS_PROMPT.to_string(),
        GenerationTask::Analysis => ANALYSIS_PROMPT.to_string(),
        GenerationTask::Translation => format!(
            "你是一个专业翻译。请将用户提供的提示词翻译成{}，只输出译文，不要添加任何解释。",
            language_name(target_language)
        ),
        // `All` is composed by the orchestrator from the three tasks above
        GenerationTask::Structured | GenerationTask::All => STRUCTURED_PROMPT.to_string(),
    }
}
