//! User-visible notices and their translations.

/// UI language for notices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// Simplified Chinese.
    Zh,
}

/// Every message the wizard can surface to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    /// VIDEO intake without description or file.
    VideoInputMissing,
    /// IMAGES intake without images or caption.
    ImagesInputMissing,
    /// SEARCH intake with no selected result.
    SearchSelectionMissing,
    /// SEARCH query was blank when a search was requested.
    SearchQueryMissing,
    /// Search returned nothing (or failed).
    SearchNoResults,
    /// Generic rejected input.
    InvalidInput,
    /// Summarization failed; the user must resubmit.
    SummarizeFailed,
    /// The credential was rejected by the service.
    CredentialRejected,
    /// No credential has been supplied.
    CredentialMissing,
    /// Export failed; use locally uploaded images instead of remote ones.
    ExportFailed,
    /// Anything else.
    Unexpected,
}

impl Notice {
    /// Translated text for `locale`.
    pub fn text(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Notice::VideoInputMissing, Locale::En) => {
                "Please describe the video or upload a video file."
            }
            (Notice::VideoInputMissing, Locale::Zh) => "请填写视频描述或上传视频文件。",
            (Notice::ImagesInputMissing, Locale::En) => {
                "Please upload at least one image or write a caption."
            }
            (Notice::ImagesInputMissing, Locale::Zh) => "请至少上传一张图片或填写配文。",
            (Notice::SearchSelectionMissing, Locale::En) => {
                "Select at least one search result to continue."
            }
            (Notice::SearchSelectionMissing, Locale::Zh) => "请至少选择一条搜索结果。",
            (Notice::SearchQueryMissing, Locale::En) => "Enter something to search for.",
            (Notice::SearchQueryMissing, Locale::Zh) => "请输入搜索关键词。",
            (Notice::SearchNoResults, Locale::En) => {
                "No results found. Try another query or source."
            }
            (Notice::SearchNoResults, Locale::Zh) => "未找到结果，请换个关键词或来源。",
            (Notice::InvalidInput, Locale::En) => "Some of the input is invalid.",
            (Notice::InvalidInput, Locale::Zh) => "输入内容无效。",
            (Notice::SummarizeFailed, Locale::En) => {
                "Could not generate a summary. Please check your input and try again."
            }
            (Notice::SummarizeFailed, Locale::Zh) => "生成摘要失败，请检查输入后重试。",
            (Notice::CredentialRejected, Locale::En) => {
                "This API key could not be verified. Please check it and try again."
            }
            (Notice::CredentialRejected, Locale::Zh) => "API Key 验证失败，请检查后重试。",
            (Notice::CredentialMissing, Locale::En) => "Please enter an API key.",
            (Notice::CredentialMissing, Locale::Zh) => "请输入 API Key。",
            (Notice::ExportFailed, Locale::En) => {
                "Export failed. Remote images cannot be exported; use locally uploaded images instead."
            }
            (Notice::ExportFailed, Locale::Zh) => {
                "导出失败：网络图片无法导出，请改用本地上传的图片。"
            }
            (Notice::Unexpected, Locale::En) => "Something went wrong. Please try again.",
            (Notice::Unexpected, Locale::Zh) => "出错了，请重试。",
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/i18n/notice.rs"]
mod tests;
