// src/modules/html/content_pipeline.rs
//! Sanitize-then-rewrite pipeline for server-supplied post bodies.
//!
//! The fragment is tokenized with html5ever and re-serialized from scratch, so only
//! allow-listed elements and attributes can reach the output. After sanitizing, relative
//! `src` attributes on `img`, `iframe` and `video` are prefixed with the API base URL.

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
    TokenizerResult,
};

use crate::shared::markup::{absolutize, escape};

const ALLOWED_ELEMENTS: &[&str] = &[
    "a", "b", "blockquote", "br", "code", "div", "em", "figcaption", "figure", "h1", "h2", "h3",
    "h4", "h5", "h6", "hr", "i", "iframe", "img", "li", "ol", "p", "pre", "s", "source", "span",
    "strong", "table", "tbody", "td", "th", "thead", "tr", "u", "ul", "video",
];

const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "source"];

/// Elements dropped together with everything inside them. Void elements such as `embed`
/// carry no content and fall through to the plain unknown-tag path.
const DROP_WITH_CONTENT: &[&str] = &["script", "style", "noscript", "template", "object"];

const LINK_REL: &str = "noopener noreferrer";

const URL_ATTRIBUTES: &[&str] = &["href", "src", "poster"];

/// Elements whose relative `src` gets the API base prepended.
const MEDIA_ELEMENTS: &[&str] = &["img", "iframe", "video"];

fn allowed_attributes(element: &str) -> &'static [&'static str] {
    match element {
        "a" => &["href", "title", "target", "rel"],
        "img" => &["src", "alt", "title", "width", "height"],
        "iframe" => &["src", "title", "width", "height", "allowfullscreen", "frameborder"],
        "video" => &["src", "controls", "width", "height", "poster"],
        "source" => &["src", "type"],
        "td" | "th" => &["colspan", "rowspan"],
        _ => &[],
    }
}

fn is_safe_url(value: &str) -> bool {
    let trimmed: String = value
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_control())
        .collect();
    let lower = trimmed.to_ascii_lowercase();

    match lower.find(':') {
        // A colon after the first path/query/fragment delimiter is not a scheme.
        Some(colon) if !lower[..colon].contains(['/', '?', '#']) => {
            let scheme = &lower[..colon];
            matches!(scheme, "http" | "https" | "mailto")
        }
        _ => true,
    }
}

struct SanitizingSink {
    base_url: String,
    out: String,
    open: Vec<String>,
    /// Element whose content is being dropped, with how many of it are still open.
    dropping: Option<(String, usize)>,
}

impl SanitizingSink {
    fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            out: String::new(),
            open: Vec::new(),
            dropping: None,
        }
    }

    fn start_tag(&mut self, tag: &Tag) {
        let name: &str = &tag.name;

        if !ALLOWED_ELEMENTS.contains(&name) {
            return;
        }

        let allowed = allowed_attributes(name);
        let opens_new_context = name == "a"
            && tag
                .attrs
                .iter()
                .any(|attr| &*attr.name.local == "target");
        self.out.push('<');
        self.out.push_str(name);

        for attr in &tag.attrs {
            let attr_name: &str = &attr.name.local;
            if !allowed.contains(&attr_name) || (opens_new_context && attr_name == "rel") {
                continue;
            }

            let mut value = String::from(&*attr.value);
            if URL_ATTRIBUTES.contains(&attr_name) && !is_safe_url(&value) {
                continue;
            }
            if attr_name == "src" && MEDIA_ELEMENTS.contains(&name) {
                value = absolutize(&self.base_url, &value);
            }

            self.out.push(' ');
            self.out.push_str(attr_name);
            self.out.push_str("=\"");
            self.out.push_str(&escape(&value));
            self.out.push('"');
        }
        if opens_new_context {
            self.out.push_str(&format!(" rel=\"{}\"", LINK_REL));
        }
        self.out.push('>');

        if !VOID_ELEMENTS.contains(&name) && !tag.self_closing {
            self.open.push(name.to_string());
        } else if !VOID_ELEMENTS.contains(&name) {
            self.out.push_str(&format!("</{}>", name));
        }
    }

    fn end_tag(&mut self, tag: &Tag) {
        let name: &str = &tag.name;
        let Some(position) = self.open.iter().rposition(|open| open == name) else {
            return;
        };

        while self.open.len() > position {
            if let Some(open) = self.open.pop() {
                self.out.push_str(&format!("</{}>", open));
            }
        }
    }

    fn finish(mut self) -> String {
        while let Some(open) = self.open.pop() {
            self.out.push_str(&format!("</{}>", open));
        }
        self.out
    }
}

impl TokenSink for SanitizingSink {
    type Handle = ();

    fn process_token(&mut self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        if let Some((dropping, depth)) = &mut self.dropping {
            if let Token::TagToken(tag) = &token {
                if &*tag.name == dropping.as_str() {
                    match tag.kind {
                        TagKind::StartTag if !tag.self_closing => *depth += 1,
                        TagKind::StartTag => {}
                        TagKind::EndTag => *depth -= 1,
                    }
                }
                if *depth == 0 {
                    self.dropping = None;
                }
            }
            return TokenSinkResult::Continue;
        }

        match token {
            Token::TagToken(tag) => match tag.kind {
                TagKind::StartTag if DROP_WITH_CONTENT.contains(&&*tag.name) => {
                    if tag.self_closing {
                        return TokenSinkResult::Continue;
                    }
                    self.dropping = Some((String::from(&*tag.name), 1));
                    return match &*tag.name {
                        "script" => TokenSinkResult::RawData(RawKind::ScriptData),
                        "style" | "noscript" => TokenSinkResult::RawData(RawKind::Rawtext),
                        _ => TokenSinkResult::Continue,
                    };
                }
                TagKind::StartTag => self.start_tag(&tag),
                TagKind::EndTag => self.end_tag(&tag),
            },
            Token::CharacterTokens(text) => self.out.push_str(&escape(&text)),
            Token::DoctypeToken(_)
            | Token::CommentToken(_)
            | Token::NullCharacterToken
            | Token::EOFToken
            | Token::ParseError(_) => {}
        }

        TokenSinkResult::Continue
    }
}

/// Sanitizes `html` and rewrites relative media sources against `base_url`.
pub fn render_post_content(html: &str, base_url: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    let mut input = BufferQueue::default();
    input.push_back(StrTendril::from(html));

    let mut tokenizer = Tokenizer::new(SanitizingSink::new(base_url), TokenizerOpts::default());
    // The sink never asks to pause for scripts; keep feeding until the queue drains.
    while let TokenizerResult::Script(()) = tokenizer.feed(&mut input) {}
    tokenizer.end();

    tokenizer.sink.finish()
}
