//! Positional message templates
//!
//! Validation messages are plain strings with positional placeholders:
//!
//! - `{}` takes the next parameter in order,
//! - `{N}` takes parameter `N` (zero based) and may repeat,
//! - `{{` and `}}` are literal braces.
//!
//! Formatting is strict. A placeholder with no matching parameter, a parameter
//! no placeholder refers to, or a template mixing `{}` with `{N}` is a
//! [`TemplateError`] instead of a silently truncated message.
//!
//! # Example
//!
//! ```
//! use keel::template::{format_template, TemplateError};
//!
//! let msg = format_template("{} must be at least {}", &[&"value", &0]).unwrap();
//! assert_eq!(msg, "value must be at least 0");
//!
//! let msg = format_template("{1} before {0}", &[&"b", &"a"]).unwrap();
//! assert_eq!(msg, "a before b");
//!
//! let err = format_template("{} and {}", &[&"only one"]).unwrap_err();
//! assert_eq!(err, TemplateError::MissingParameter { index: 1, count: 1 });
//! ```

use std::fmt::Display;

use thiserror::Error;

/// Why a template could not be rendered with the given parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// A placeholder points past the end of the parameter list.
    #[error("placeholder {{{index}}} has no parameter ({count} supplied)")]
    MissingParameter {
        /// Index the placeholder asked for.
        index: usize,
        /// Number of parameters supplied.
        count: usize,
    },

    /// A parameter was supplied but never referenced.
    #[error("parameter {index} is never referenced by the template")]
    UnusedParameter {
        /// Index of the first unreferenced parameter.
        index: usize,
    },

    /// A `{` without its `}`, or a lone `}`.
    #[error("unmatched `{brace}` at byte {position}")]
    UnbalancedBrace {
        /// The offending brace.
        brace: char,
        /// Byte offset in the template.
        position: usize,
    },

    /// Placeholder content that is neither empty nor an index.
    #[error("invalid placeholder `{{{content}}}`")]
    InvalidPlaceholder {
        /// Text found between the braces.
        content: String,
    },

    /// Both `{}` and `{N}` appear in one template.
    #[error("template mixes automatic `{{}}` and numbered `{{N}}` placeholders")]
    MixedNumbering,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Numbering {
    Automatic,
    Manual,
}

/// Render `template` with positional `params`.
pub fn format_template(template: &str, params: &[&dyn Display]) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut used = vec![false; params.len()];
    let mut next_auto = 0usize;
    let mut numbering: Option<Numbering> = None;
    let mut chars = template.char_indices().peekable();

    while let Some((position, c)) = chars.next() {
        match c {
            '{' => {
                if chars.next_if(|&(_, c)| c == '{').is_some() {
                    out.push('{');
                    continue;
                }

                let mut content = String::new();
                let mut closed = false;
                for (_, c) in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    content.push(c);
                }
                if !closed {
                    return Err(TemplateError::UnbalancedBrace {
                        brace: '{',
                        position,
                    });
                }

                let (index, style) = if content.is_empty() {
                    let index = next_auto;
                    next_auto += 1;
                    (index, Numbering::Automatic)
                } else {
                    let index = content
                        .trim()
                        .parse::<usize>()
                        .map_err(|_| TemplateError::InvalidPlaceholder {
                            content: content.clone(),
                        })?;
                    (index, Numbering::Manual)
                };

                match numbering {
                    Some(seen) if seen != style => return Err(TemplateError::MixedNumbering),
                    _ => numbering = Some(style),
                }

                let param = params.get(index).ok_or(TemplateError::MissingParameter {
                    index,
                    count: params.len(),
                })?;
                used[index] = true;
                out.push_str(&param.to_string());
            }
            '}' => {
                if chars.next_if(|&(_, c)| c == '}').is_some() {
                    out.push('}');
                } else {
                    return Err(TemplateError::UnbalancedBrace {
                        brace: '}',
                        position,
                    });
                }
            }
            _ => out.push(c),
        }
    }

    if let Some(index) = used.iter().position(|referenced| !referenced) {
        return Err(TemplateError::UnusedParameter { index });
    }

    Ok(out)
}

/// Render for the accumulator: a broken template is a programming error.
///
/// Debug builds panic with the template and the cause. Release builds keep the
/// raw template as the message so the failure itself is not lost.
pub(crate) fn render(template: &str, params: &[&dyn Display]) -> String {
    match format_template(template, params) {
        Ok(message) => message,
        Err(err) => {
            if cfg!(debug_assertions) {
                panic!("message template {template:?} with {} parameter(s): {err}", params.len());
            }

            #[cfg(feature = "tracing")]
            tracing::warn!(
                target: "keel::template",
                template,
                params = params.len(),
                error = %err,
                "malformed validation message template"
            );

            template.to_string()
        }
    }
}
