//! JavaScript content assist
//!
//! Produces keyword, statement template and member completion proposals for
//! a JavaScript buffer. Proposals are computed from the text around the
//! cursor only; no parsing or type inference beyond recognizing a string
//! literal receiver takes place.
//!
//! All offsets are character offsets into the buffer.
//!
//! # Example
//!
//! ```
//! use jsctx_domain::assist::JavaScriptContentAssist;
//!
//! let buffer = "wh";
//! let proposals = JavaScriptContentAssist::proposals("wh", buffer, 2);
//! assert_eq!(proposals[0].description.as_deref(), Some("while - while loop with condition"));
//! assert_eq!(proposals[1].proposal, "while");
//! ```

use serde::Serialize;

/// A linked-mode region inside an inserted proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LinkedPosition {
    pub offset: usize,
    pub length: usize,
}

/// A single completion proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Proposal {
    /// Text to insert in place of the prefix.
    pub proposal: String,
    /// Label shown to the user; `None` for bare keywords.
    pub description: Option<String>,
    /// Linked-mode regions (template parameters).
    pub positions: Vec<LinkedPosition>,
    /// Where the caret goes once linked mode is left.
    pub escape_position: Option<usize>,
}

impl Proposal {
    /// A bare proposal with no description or linked positions.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            proposal: text.into(),
            description: None,
            positions: Vec::new(),
            escape_position: None,
        }
    }

    fn template(
        text: String,
        description: &str,
        positions: Vec<LinkedPosition>,
        escape_position: usize,
    ) -> Self {
        Self {
            proposal: text,
            description: Some(description.to_string()),
            positions,
            escape_position: Some(escape_position),
        }
    }
}

struct StringMethod {
    name: &'static str,
    args: &'static [&'static str],
}

// ECMA-262 section 15.5.4
const STRING_METHODS: &[StringMethod] = &[
    StringMethod { name: "charAt", args: &["index"] },
    StringMethod { name: "charCodeAt", args: &["index"] },
    StringMethod { name: "concat", args: &["array"] },
    StringMethod { name: "indexOf", args: &["searchString", "[position]"] },
    StringMethod { name: "lastIndexOf", args: &["searchString", "[position]"] },
    StringMethod { name: "localeCompare", args: &["object"] },
    StringMethod { name: "match", args: &["regexp"] },
    StringMethod { name: "replace", args: &["searchValue", "replaceValue"] },
    StringMethod { name: "search", args: &["regexp"] },
    StringMethod { name: "slice", args: &["start", "end"] },
    StringMethod { name: "split", args: &["separator", "[limit]"] },
    StringMethod { name: "substring", args: &["start", "[end]"] },
    StringMethod { name: "toLowerCase", args: &[] },
    StringMethod { name: "toLocaleLowerCase", args: &[] },
    StringMethod { name: "toUpperCase", args: &[] },
    StringMethod { name: "toLocaleUpperCase", args: &[] },
    StringMethod { name: "trim", args: &[] },
];

// ECMA-262 section 15.2.4
const OBJECT_MEMBERS: &[&str] = &[
    "toString",
    "toLocaleString",
    "valueOf",
    "hasOwnProperty",
    "isPrototypeOf",
    "propertyIsEnumerable",
];

const KEYWORDS: &[&str] = &[
    "break", "case", "catch", "continue", "debugger", "default", "delete", "do", "else",
    "finally", "for", "function", "if", "in", "instanceof", "new", "return", "switch", "this",
    "throw", "try", "typeof", "var", "void", "while", "with",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReceiverType {
    String,
}

/// Content assist provider for JavaScript keywords, templates and members.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaScriptContentAssist;

impl JavaScriptContentAssist {
    /// Computes proposals for `prefix` ending at character `offset`.
    ///
    /// When the character before the prefix is `.`, only member proposals
    /// are returned; otherwise templates followed by keywords.
    pub fn proposals(prefix: &str, buffer: &str, offset: usize) -> Vec<Proposal> {
        let cursor = Cursor::new(prefix, buffer, offset);

        if cursor.offset > 0 && cursor.char_before_prefix() == Some('.') {
            return cursor.member_proposals();
        }

        let mut proposals = cursor.template_proposals();
        proposals.extend(cursor.keyword_proposals());
        proposals
    }

    /// The identifier characters immediately before character `offset`.
    pub fn prefix_at(buffer: &str, offset: usize) -> String {
        let before: Vec<char> = buffer.chars().take(offset).collect();
        let start = before
            .iter()
            .rposition(|c| !is_identifier_char(*c))
            .map_or(0, |i| i + 1);
        before[start..].iter().collect()
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

struct Cursor<'a> {
    prefix: &'a str,
    prefix_len: usize,
    chars: Vec<char>,
    offset: usize,
}

impl<'a> Cursor<'a> {
    fn new(prefix: &'a str, buffer: &str, offset: usize) -> Self {
        let chars: Vec<char> = buffer.chars().collect();
        Self {
            prefix,
            prefix_len: prefix.chars().count(),
            offset: offset.min(chars.len()),
            chars,
        }
    }

    fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    fn char_before_prefix(&self) -> Option<char> {
        let index = self.offset.checked_sub(self.prefix_len + 1)?;
        self.char_at(index)
    }

    /// Offset where the prefix starts.
    fn start(&self) -> usize {
        self.offset.saturating_sub(self.prefix_len)
    }

    /// Whitespace at the start of the current line.
    fn leading_whitespace(&self) -> String {
        let mut whitespace = String::new();
        let mut index = self.offset.saturating_sub(1);
        while index > 0 {
            let Some(c) = self.char_at(index) else {
                break;
            };
            index -= 1;
            if c == '\n' || c == '\r' {
                break;
            }
            if c.is_whitespace() {
                whitespace.insert(0, c);
            } else {
                whitespace.clear();
            }
        }
        whitespace
    }

    /// The current line up to, but not including, the prefix.
    fn prefix_line(&self) -> String {
        let mut line_start = 0;
        let mut index = self.offset;
        while index > 0 {
            index -= 1;
            if matches!(self.char_at(index), Some('\n') | Some('\r')) {
                line_start = index + 1;
                break;
            }
        }
        let end = self.start().max(line_start);
        self.chars[line_start..end].iter().collect()
    }

    fn infer_type(&self) -> Option<ReceiverType> {
        // the line is known to end with a dot
        let line: Vec<char> = self.prefix_line().chars().collect();
        if line.len() > 1 && matches!(line[line.len() - 2], '"' | '\'') {
            return Some(ReceiverType::String);
        }
        None
    }

    fn member_proposals(&self) -> Vec<Proposal> {
        let mut proposals = Vec::new();

        if self.infer_type() == Some(ReceiverType::String) {
            for method in STRING_METHODS {
                if !method.name.starts_with(self.prefix) {
                    continue;
                }
                if method.args.is_empty() {
                    let text = format!("{}()", method.name);
                    let description = format!("{} - String", text);
                    proposals.push(Proposal {
                        description: Some(description),
                        ..Proposal::text(text)
                    });
                    continue;
                }

                let mut positions = Vec::new();
                let mut end = self.start() + method.name.chars().count() + 1;
                for arg in method.args {
                    let length = arg.chars().count();
                    positions.push(LinkedPosition { offset: end, length });
                    end += length + 2;
                }
                let text = format!("{}({})", method.name, method.args.join(", "));
                proposals.push(Proposal {
                    description: Some(format!("{} - String", text)),
                    proposal: text,
                    positions,
                    escape_position: Some(end - 1),
                });
            }
        }

        proposals.extend(
            OBJECT_MEMBERS
                .iter()
                .filter(|m| m.starts_with(self.prefix))
                .map(|m| Proposal::text(*m)),
        );
        proposals
    }

    fn template_proposals(&self) -> Vec<Proposal> {
        let start = self.start();
        let ws = self.leading_whitespace();
        let w = ws.chars().count();
        let offered = |keyword: &str| keyword.starts_with(self.prefix);
        let at = |offset: usize, length: usize| LinkedPosition {
            offset: start + offset,
            length,
        };
        let mut proposals = Vec::new();

        if offered("if") {
            proposals.push(Proposal::template(
                format!("if (condition) {{\n{ws}\t\n{ws}}}"),
                "if - if statement",
                vec![at(4, 9)],
                start + w + 18,
            ));
            proposals.push(Proposal::template(
                format!("if (condition) {{\n{ws}\t\n{ws}}} else {{\n{ws}\t\n{ws}}}"),
                "if - if else statement",
                vec![at(4, 9)],
                start + w + 18,
            ));
        }
        if offered("for") {
            proposals.push(Proposal::template(
                format!("for (var i = 0; i < array.length; i++) {{\n{ws}\t\n{ws}}}"),
                "for - iterate over array",
                vec![at(9, 1), at(20, 5)],
                start + w + 42,
            ));
            proposals.push(Proposal::template(
                format!(
                    "for (var property in object) {{\n{ws}\tif (object.hasOwnProperty(property)) {{\n{ws}\t\t\n{ws}\t}}\n{ws}}}"
                ),
                "for..in - iterate over properties of an object",
                vec![at(9, 8), at(21, 6)],
                start + 2 * w + 73,
            ));
        }
        if offered("while") {
            proposals.push(Proposal::template(
                format!("while (condition) {{\n{ws}\t\n{ws}}}"),
                "while - while loop with condition",
                vec![at(7, 9)],
                start + w + 21,
            ));
        }
        if offered("do") {
            proposals.push(Proposal::template(
                format!("do {{\n{ws}\t\n{ws}}} while (condition);"),
                "do - do while loop with condition",
                vec![at(16, 9)],
                start + w + 6,
            ));
        }
        if offered("switch") {
            proposals.push(Proposal::template(
                format!(
                    "switch (expression) {{\n{ws}\tcase value1:\n{ws}\t\t\n{ws}\t\tbreak;\n{ws}\tdefault:\n{ws}}}"
                ),
                "switch - switch case statement",
                vec![at(8, 10), at(28, 6)],
                start + 2 * w + 38,
            ));
        }
        if offered("try") {
            proposals.push(Proposal::template(
                format!("try {{\n{ws}\t\n{ws}}} catch (err) {{\n{ws}}}"),
                "try - try..catch statement",
                Vec::new(),
                start + w + 7,
            ));
            proposals.push(Proposal::template(
                format!("try {{\n{ws}\t\n{ws}}} catch (err) {{\n{ws}}} finally {{\n{ws}}}"),
                "try - try..catch statement with finally block",
                Vec::new(),
                start + w + 7,
            ));
        }
        proposals
    }

    fn keyword_proposals(&self) -> Vec<Proposal> {
        KEYWORDS
            .iter()
            .filter(|k| k.starts_with(self.prefix))
            .map(|k| Proposal::text(*k))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(proposals: &[Proposal]) -> Vec<&str> {
        proposals.iter().map(|p| p.proposal.as_str()).collect()
    }

    #[test]
    fn test_empty_prefix_lists_all_keywords_after_templates() {
        let proposals = JavaScriptContentAssist::proposals("", "", 0);
        let keywords: Vec<_> = proposals
            .iter()
            .filter(|p| p.description.is_none())
            .collect();
        assert_eq!(keywords.len(), KEYWORDS.len());
        assert_eq!(proposals.len(), KEYWORDS.len() + 9);
    }

    #[test]
    fn test_prefix_at() {
        assert_eq!(JavaScriptContentAssist::prefix_at("var x = wh", 10), "wh");
        assert_eq!(JavaScriptContentAssist::prefix_at("'a'.ch", 6), "ch");
        assert_eq!(JavaScriptContentAssist::prefix_at("$el.fo", 3), "$el");
        assert_eq!(JavaScriptContentAssist::prefix_at("a.", 2), "");
        assert_eq!(JavaScriptContentAssist::prefix_at("", 5), "");
    }

    #[test]
    fn test_keyword_prefix_filter() {
        let proposals = JavaScriptContentAssist::proposals("ty", "ty", 2);
        assert_eq!(texts(&proposals), vec!["typeof"]);
    }

    #[test]
    fn test_if_template_offsets() {
        let proposals = JavaScriptContentAssist::proposals("if", "if", 2);
        let first = &proposals[0];
        assert_eq!(first.proposal, "if (condition) {\n\t\n}");
        assert_eq!(first.positions, vec![LinkedPosition { offset: 4, length: 9 }]);
        assert_eq!(first.escape_position, Some(18));
        assert_eq!(proposals[1].description.as_deref(), Some("if - if else statement"));
        // keyword proposals follow the templates
        assert_eq!(texts(&proposals[2..]), vec!["if"]);
    }

    #[test]
    fn test_template_uses_leading_whitespace() {
        let buffer = "function f() {\n    wh";
        let offset = buffer.chars().count();
        let proposals = JavaScriptContentAssist::proposals("wh", buffer, offset);
        assert_eq!(proposals[0].proposal, "while (condition) {\n    \t\n    }");
        assert_eq!(proposals[0].escape_position, Some(offset - 2 + 4 + 21));
    }

    #[test]
    fn test_member_on_string_literal() {
        let buffer = "var s = \"abc\".su";
        let offset = buffer.chars().count();
        let proposals = JavaScriptContentAssist::proposals("su", buffer, offset);
        assert_eq!(texts(&proposals), vec!["substring(start, [end])"]);
        let start = offset - 2;
        assert_eq!(
            proposals[0].positions,
            vec![
                LinkedPosition { offset: start + 10, length: 5 },
                LinkedPosition { offset: start + 17, length: 5 },
            ]
        );
        assert_eq!(proposals[0].escape_position, Some(start + 23));
        assert_eq!(
            proposals[0].description.as_deref(),
            Some("substring(start, [end]) - String")
        );
    }

    #[test]
    fn test_member_no_args_method() {
        let buffer = "'x'.tr";
        let proposals = JavaScriptContentAssist::proposals("tr", buffer, 6);
        assert_eq!(proposals[0].proposal, "trim()");
        assert!(proposals[0].positions.is_empty());
    }

    #[test]
    fn test_member_on_unknown_receiver_only_object_members() {
        let buffer = "foo.to";
        let proposals = JavaScriptContentAssist::proposals("to", buffer, 6);
        assert_eq!(texts(&proposals), vec!["toString", "toLocaleString"]);
    }

    #[test]
    fn test_multibyte_buffer_uses_char_offsets() {
        let buffer = "// é\n'é'.ch";
        let offset = buffer.chars().count();
        let proposals = JavaScriptContentAssist::proposals("ch", buffer, offset);
        assert_eq!(texts(&proposals), vec!["charAt(index)", "charCodeAt(index)"]);
    }
}
