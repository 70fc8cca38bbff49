//! Positional function arguments
//!
//! Accepts either a full call, `xjoin(myComponent, 'score')`, or the bare
//! argument list, `myComponent, score`. Arguments are separated by commas
//! and may be single- or double-quoted.

use std::collections::VecDeque;

use super::errors::{JoinError, JoinResult};

/// Remaining arguments of one function call, consumed left to right
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionArgs {
    function: Option<String>,
    args: VecDeque<String>,
}

impl FunctionArgs {
    /// Wrap already-split arguments
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            function: None,
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a call or an argument list
    pub fn parse(text: &str) -> JoinResult<Self> {
        let text = text.trim();

        let (function, inner) = match text.find('(') {
            Some(open) => {
                let Some(inner) = text[open + 1..].strip_suffix(')') else {
                    return Err(JoinError::Syntax(format!("missing ')' in '{}'", text)));
                };
                let name = text[..open].trim();
                if name.is_empty() {
                    return Err(JoinError::Syntax(format!("missing function name in '{}'", text)));
                }
                (Some(name.to_string()), inner)
            }
            None => (None, text),
        };

        Ok(Self {
            function,
            args: split_args(inner)?,
        })
    }

    /// Function name, when parsed from a full call
    pub fn function(&self) -> Option<&str> {
        self.function.as_deref()
    }

    /// Consume the next argument
    pub fn parse_arg(&mut self) -> JoinResult<String> {
        self.args.pop_front().ok_or_else(|| {
            JoinError::Syntax(match &self.function {
                Some(name) => format!("expected another argument to {}()", name),
                None => "expected another argument".to_string(),
            })
        })
    }

    /// Number of arguments not yet consumed
    pub fn remaining(&self) -> usize {
        self.args.len()
    }

    /// Arguments not yet consumed, in call order
    pub fn unconsumed(&self) -> Vec<&str> {
        self.args.iter().map(String::as_str).collect()
    }

    /// Fail if any argument was left unconsumed
    pub fn finish(&self) -> JoinResult<()> {
        if self.args.is_empty() {
            return Ok(());
        }
        let unused = self.unconsumed().join(", ");
        Err(JoinError::Syntax(match &self.function {
            Some(name) => format!("unexpected arguments to {}(): {}", name, unused),
            None => format!("unexpected arguments: {}", unused),
        }))
    }
}

fn split_args(inner: &str) -> JoinResult<VecDeque<String>> {
    let mut args = VecDeque::new();
    if inner.trim().is_empty() {
        return Ok(args);
    }

    let mut current = String::new();
    let mut quoted = false;
    let mut quote: Option<char> = None;

    for c in inner.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None => match c {
                '\'' | '"' => {
                    quote = Some(c);
                    quoted = true;
                }
                ',' => {
                    args.push_back(finish_arg(&current, quoted)?);
                    current.clear();
                    quoted = false;
                }
                c => current.push(c),
            },
        }
    }

    if let Some(q) = quote {
        return Err(JoinError::Syntax(format!("unterminated {} quote", q)));
    }
    args.push_back(finish_arg(&current, quoted)?);

    Ok(args)
}

fn finish_arg(raw: &str, quoted: bool) -> JoinResult<String> {
    let arg = raw.trim();
    if arg.is_empty() && !quoted {
        return Err(JoinError::Syntax("empty argument".to_string()));
    }
    Ok(arg.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_call() {
        let mut args = FunctionArgs::parse("xjoin(myComponent, score)").unwrap();
        assert_eq!(args.function(), Some("xjoin"));
        assert_eq!(args.parse_arg().unwrap(), "myComponent");
        assert_eq!(args.parse_arg().unwrap(), "score");
        assert_eq!(args.remaining(), 0);
    }

    #[test]
    fn test_bare_list() {
        let mut args = FunctionArgs::parse(" score ").unwrap();
        assert_eq!(args.function(), None);
        assert_eq!(args.parse_arg().unwrap(), "score");
    }

    #[test]
    fn test_quoted_args() {
        let mut args = FunctionArgs::parse(r#"xjoin('my,comp', "score")"#).unwrap();
        assert_eq!(args.parse_arg().unwrap(), "my,comp");
        assert_eq!(args.parse_arg().unwrap(), "score");
    }

    #[test]
    fn test_empty_call() {
        let mut args = FunctionArgs::parse("xjoin()").unwrap();
        assert_eq!(args.remaining(), 0);
        let err = args.parse_arg().unwrap_err();
        assert!(err.to_string().contains("xjoin()"));
    }

    #[test]
    fn test_exhausted() {
        let mut args = FunctionArgs::new(["only"]);
        args.parse_arg().unwrap();
        assert!(matches!(args.parse_arg(), Err(JoinError::Syntax(_))));
    }

    #[test]
    fn test_finish_reports_unconsumed() {
        let mut args = FunctionArgs::parse("xjoin(a, b, c)").unwrap();
        args.parse_arg().unwrap();
        assert_eq!(args.unconsumed(), vec!["b", "c"]);

        let err = args.finish().unwrap_err();
        assert!(err.to_string().contains("xjoin(): b, c"));

        args.parse_arg().unwrap();
        args.parse_arg().unwrap();
        assert!(args.finish().is_ok());
    }

    #[test]
    fn test_missing_close_paren() {
        assert!(matches!(
            FunctionArgs::parse("xjoin(a, b"),
            Err(JoinError::Syntax(_))
        ));
    }

    #[test]
    fn test_unterminated_quote() {
        assert!(matches!(
            FunctionArgs::parse("xjoin('a, b)"),
            Err(JoinError::Syntax(_))
        ));
    }

    #[test]
    fn test_empty_argument() {
        assert!(matches!(
            FunctionArgs::parse("xjoin(a,,b)"),
            Err(JoinError::Syntax(_))
        ));
    }

    #[test]
    fn test_quoted_empty_argument_allowed() {
        let mut args = FunctionArgs::parse("xjoin(c, '')").unwrap();
        args.parse_arg().unwrap();
        assert_eq!(args.parse_arg().unwrap(), "");
    }
}
