use phf::phf_set;

/// Reserved words of the C-family dialect the editor highlights.
///
/// Kept exactly as the editor has always shipped it, `motable` spelling included.
pub static RESERVED_WORDS: phf::Set<&'static str> = phf_set! {
    "asm",
    "auto",
    "bool",
    "break",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "const_cast",
    "continue",
    "default",
    "delete",
    "do",
    "double",
    "dynamic_cast",
    "if",
    "else",
    "enum",
    "explicit",
    "export",
    "extern",
    "false",
    "float",
    "for",
    "friend",
    "inline",
    "int",
    "long",
    "motable",
    "new",
    "operator",
    "protected",
    "public",
    "register",
    "reinterpret_cast",
    "return",
    "short",
    "goto",
    "static",
    "static_cast",
    "struct",
    "switch",
    "namespace",
    "this",
    "private",
    "typedef",
    "union",
    "unsigned",
    "signed",
    "sizeof",
    "void",
    "wchar_t",
    "while",
    "throw",
    "true",
    "try",
    "typeid",
    "typename",
    "using",
    "virtual",
    "volatile",
    "template",
};

pub fn is_reserved_word(span: &str) -> bool {
    RESERVED_WORDS.contains(span)
}
