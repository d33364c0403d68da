//! Syntax diagnostics reported by the engine.
//!
//! These are data, not decode failures: a source text with syntax errors still
//! decodes into a tree, with the problems listed here. Both kind tables are closed
//! and belong to protocol version 0.24.0; the wire id of a kind is its position in
//! the table (warnings additionally offset by [`WARNING_ID_OFFSET`]).

use core::fmt;
use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::nodes::Location;

/// Errors and warnings share one id byte; warning ids start here.
pub const WARNING_ID_OFFSET: u8 = 224;

macro_rules! diagnostic_kinds {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $( $variant:ident = $label:literal, )+
        }
    ) => {
        $(#[$outer])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
        pub enum $name {
            $( $variant, )+
        }

        impl $name {
            /// Every kind, in id order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            /// Looks a kind up by its table index.
            #[must_use]
            pub fn from_index(index: usize) -> Option<Self> {
                Self::ALL.get(index).copied()
            }

            /// Upper-case label, e.g. `"ARGUMENT_AFTER_BLOCK"`.
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

diagnostic_kinds! {
    /// Syntax error kinds.
    pub enum ErrorKind {
        AliasArgument = "ALIAS_ARGUMENT",
        AmpampeqMultiAssign = "AMPAMPEQ_MULTI_ASSIGN",
        ArgumentAfterBlock = "ARGUMENT_AFTER_BLOCK",
        ArgumentAfterForwardingEllipses = "ARGUMENT_AFTER_FORWARDING_ELLIPSES",
        ArgumentBareHash = "ARGUMENT_BARE_HASH",
        ArgumentBlockForwarding = "ARGUMENT_BLOCK_FORWARDING",
        ArgumentBlockMulti = "ARGUMENT_BLOCK_MULTI",
        ArgumentFormalClass = "ARGUMENT_FORMAL_CLASS",
        ArgumentFormalConstant = "ARGUMENT_FORMAL_CONSTANT",
        ArgumentFormalGlobal = "ARGUMENT_FORMAL_GLOBAL",
        ArgumentFormalIvar = "ARGUMENT_FORMAL_IVAR",
        ArgumentForwardingUnbound = "ARGUMENT_FORWARDING_UNBOUND",
        ArgumentIn = "ARGUMENT_IN",
        ArgumentNoForwardingAmp = "ARGUMENT_NO_FORWARDING_AMP",
        ArgumentNoForwardingEllipses = "ARGUMENT_NO_FORWARDING_ELLIPSES",
        ArgumentNoForwardingStar = "ARGUMENT_NO_FORWARDING_STAR",
        ArgumentSplatAfterAssocSplat = "ARGUMENT_SPLAT_AFTER_ASSOC_SPLAT",
        ArgumentSplatAfterSplat = "ARGUMENT_SPLAT_AFTER_SPLAT",
        ArgumentTermParen = "ARGUMENT_TERM_PAREN",
        ArgumentUnexpectedBlock = "ARGUMENT_UNEXPECTED_BLOCK",
        ArrayElement = "ARRAY_ELEMENT",
        ArrayExpression = "ARRAY_EXPRESSION",
        ArrayExpressionAfterStar = "ARRAY_EXPRESSION_AFTER_STAR",
        ArraySeparator = "ARRAY_SEPARATOR",
        ArrayTerm = "ARRAY_TERM",
        BeginLonelyElse = "BEGIN_LONELY_ELSE",
        BeginTerm = "BEGIN_TERM",
        BeginUpcaseBrace = "BEGIN_UPCASE_BRACE",
        BeginUpcaseTerm = "BEGIN_UPCASE_TERM",
        BeginUpcaseToplevel = "BEGIN_UPCASE_TOPLEVEL",
        BlockParamLocalVariable = "BLOCK_PARAM_LOCAL_VARIABLE",
        BlockParamPipeTerm = "BLOCK_PARAM_PIPE_TERM",
        BlockTermBrace = "BLOCK_TERM_BRACE",
        BlockTermEnd = "BLOCK_TERM_END",
        CannotParseExpression = "CANNOT_PARSE_EXPRESSION",
        CannotParseStringPart = "CANNOT_PARSE_STRING_PART",
        CaseExpressionAfterCase = "CASE_EXPRESSION_AFTER_CASE",
        CaseExpressionAfterWhen = "CASE_EXPRESSION_AFTER_WHEN",
        CaseMatchMissingPredicate = "CASE_MATCH_MISSING_PREDICATE",
        CaseMissingConditions = "CASE_MISSING_CONDITIONS",
        CaseTerm = "CASE_TERM",
        ClassInMethod = "CLASS_IN_METHOD",
        ClassName = "CLASS_NAME",
        ClassSuperclass = "CLASS_SUPERCLASS",
        ClassTerm = "CLASS_TERM",
        ClassUnexpectedEnd = "CLASS_UNEXPECTED_END",
        ConditionalElsifPredicate = "CONDITIONAL_ELSIF_PREDICATE",
        ConditionalIfPredicate = "CONDITIONAL_IF_PREDICATE",
        ConditionalPredicateTerm = "CONDITIONAL_PREDICATE_TERM",
        ConditionalTerm = "CONDITIONAL_TERM",
        ConditionalTermElse = "CONDITIONAL_TERM_ELSE",
        ConditionalUnlessPredicate = "CONDITIONAL_UNLESS_PREDICATE",
        ConditionalUntilPredicate = "CONDITIONAL_UNTIL_PREDICATE",
        ConditionalWhilePredicate = "CONDITIONAL_WHILE_PREDICATE",
        ConstantPathColonColonConstant = "CONSTANT_PATH_COLON_COLON_CONSTANT",
        DefEndless = "DEF_ENDLESS",
        DefEndlessSetter = "DEF_ENDLESS_SETTER",
        DefName = "DEF_NAME",
        DefNameAfterReceiver = "DEF_NAME_AFTER_RECEIVER",
        DefParamsTerm = "DEF_PARAMS_TERM",
        DefParamsTermParen = "DEF_PARAMS_TERM_PAREN",
        DefReceiver = "DEF_RECEIVER",
        DefReceiverTerm = "DEF_RECEIVER_TERM",
        DefTerm = "DEF_TERM",
        DefinedExpression = "DEFINED_EXPRESSION",
        EmbdocTerm = "EMBDOC_TERM",
        EmbexprEnd = "EMBEXPR_END",
        EmbvarInvalid = "EMBVAR_INVALID",
        EndUpcaseBrace = "END_UPCASE_BRACE",
        EndUpcaseTerm = "END_UPCASE_TERM",
        EscapeInvalidControl = "ESCAPE_INVALID_CONTROL",
        EscapeInvalidControlRepeat = "ESCAPE_INVALID_CONTROL_REPEAT",
        EscapeInvalidHexadecimal = "ESCAPE_INVALID_HEXADECIMAL",
        EscapeInvalidMeta = "ESCAPE_INVALID_META",
        EscapeInvalidMetaRepeat = "ESCAPE_INVALID_META_REPEAT",
        EscapeInvalidUnicode = "ESCAPE_INVALID_UNICODE",
        EscapeInvalidUnicodeCmFlags = "ESCAPE_INVALID_UNICODE_CM_FLAGS",
        EscapeInvalidUnicodeLiteral = "ESCAPE_INVALID_UNICODE_LITERAL",
        EscapeInvalidUnicodeLong = "ESCAPE_INVALID_UNICODE_LONG",
        EscapeInvalidUnicodeTerm = "ESCAPE_INVALID_UNICODE_TERM",
        ExpectArgument = "EXPECT_ARGUMENT",
        ExpectEolAfterStatement = "EXPECT_EOL_AFTER_STATEMENT",
        ExpectExpressionAfterAmpampeq = "EXPECT_EXPRESSION_AFTER_AMPAMPEQ",
        ExpectExpressionAfterComma = "EXPECT_EXPRESSION_AFTER_COMMA",
        ExpectExpressionAfterEqual = "EXPECT_EXPRESSION_AFTER_EQUAL",
        ExpectExpressionAfterLessLess = "EXPECT_EXPRESSION_AFTER_LESS_LESS",
        ExpectExpressionAfterLparen = "EXPECT_EXPRESSION_AFTER_LPAREN",
        ExpectExpressionAfterOperator = "EXPECT_EXPRESSION_AFTER_OPERATOR",
        ExpectExpressionAfterPipepipeeq = "EXPECT_EXPRESSION_AFTER_PIPEPIPEEQ",
        ExpectExpressionAfterQuestion = "EXPECT_EXPRESSION_AFTER_QUESTION",
        ExpectExpressionAfterSplat = "EXPECT_EXPRESSION_AFTER_SPLAT",
        ExpectExpressionAfterSplatHash = "EXPECT_EXPRESSION_AFTER_SPLAT_HASH",
        ExpectExpressionAfterStar = "EXPECT_EXPRESSION_AFTER_STAR",
        ExpectIdentReqParameter = "EXPECT_IDENT_REQ_PARAMETER",
        ExpectLparenReqParameter = "EXPECT_LPAREN_REQ_PARAMETER",
        ExpectRbracket = "EXPECT_RBRACKET",
        ExpectRparen = "EXPECT_RPAREN",
        ExpectRparenAfterMulti = "EXPECT_RPAREN_AFTER_MULTI",
        ExpectRparenReqParameter = "EXPECT_RPAREN_REQ_PARAMETER",
        ExpectStringContent = "EXPECT_STRING_CONTENT",
        ExpectWhenDelimiter = "EXPECT_WHEN_DELIMITER",
        ExpressionBareHash = "EXPRESSION_BARE_HASH",
        FloatParse = "FLOAT_PARSE",
        ForCollection = "FOR_COLLECTION",
        ForIn = "FOR_IN",
        ForIndex = "FOR_INDEX",
        ForTerm = "FOR_TERM",
        HashExpressionAfterLabel = "HASH_EXPRESSION_AFTER_LABEL",
        HashKey = "HASH_KEY",
        HashRocket = "HASH_ROCKET",
        HashTerm = "HASH_TERM",
        HashValue = "HASH_VALUE",
        HeredocTerm = "HEREDOC_TERM",
        IncompleteQuestionMark = "INCOMPLETE_QUESTION_MARK",
        IncompleteVariableClass = "INCOMPLETE_VARIABLE_CLASS",
        IncompleteVariableInstance = "INCOMPLETE_VARIABLE_INSTANCE",
        InvalidCharacter = "INVALID_CHARACTER",
        InvalidEncodingMagicComment = "INVALID_ENCODING_MAGIC_COMMENT",
        InvalidFloatExponent = "INVALID_FLOAT_EXPONENT",
        InvalidMultibyteCharacter = "INVALID_MULTIBYTE_CHARACTER",
        InvalidMultibyteEscape = "INVALID_MULTIBYTE_ESCAPE",
        InvalidNumberBinary = "INVALID_NUMBER_BINARY",
        InvalidNumberDecimal = "INVALID_NUMBER_DECIMAL",
        InvalidNumberHexadecimal = "INVALID_NUMBER_HEXADECIMAL",
        InvalidNumberOctal = "INVALID_NUMBER_OCTAL",
        InvalidNumberUnderscore = "INVALID_NUMBER_UNDERSCORE",
        InvalidPercent = "INVALID_PERCENT",
        InvalidVariableGlobal = "INVALID_VARIABLE_GLOBAL",
        LambdaOpen = "LAMBDA_OPEN",
        LambdaTermBrace = "LAMBDA_TERM_BRACE",
        LambdaTermEnd = "LAMBDA_TERM_END",
        ListILowerElement = "LIST_I_LOWER_ELEMENT",
        ListILowerTerm = "LIST_I_LOWER_TERM",
        ListIUpperElement = "LIST_I_UPPER_ELEMENT",
        ListIUpperTerm = "LIST_I_UPPER_TERM",
        ListWLowerElement = "LIST_W_LOWER_ELEMENT",
        ListWLowerTerm = "LIST_W_LOWER_TERM",
        ListWUpperElement = "LIST_W_UPPER_ELEMENT",
        ListWUpperTerm = "LIST_W_UPPER_TERM",
        MallocFailed = "MALLOC_FAILED",
        ModuleInMethod = "MODULE_IN_METHOD",
        ModuleName = "MODULE_NAME",
        ModuleTerm = "MODULE_TERM",
        MultiAssignMultiSplats = "MULTI_ASSIGN_MULTI_SPLATS",
        MultiAssignUnexpectedRest = "MULTI_ASSIGN_UNEXPECTED_REST",
        NoLocalVariable = "NO_LOCAL_VARIABLE",
        NotExpression = "NOT_EXPRESSION",
        NumberLiteralUnderscore = "NUMBER_LITERAL_UNDERSCORE",
        NumberedParameterNotAllowed = "NUMBERED_PARAMETER_NOT_ALLOWED",
        NumberedParameterOuterScope = "NUMBERED_PARAMETER_OUTER_SCOPE",
        OperatorMultiAssign = "OPERATOR_MULTI_ASSIGN",
        OperatorWriteArguments = "OPERATOR_WRITE_ARGUMENTS",
        OperatorWriteBlock = "OPERATOR_WRITE_BLOCK",
        ParameterAssocSplatMulti = "PARAMETER_ASSOC_SPLAT_MULTI",
        ParameterBlockMulti = "PARAMETER_BLOCK_MULTI",
        ParameterCircular = "PARAMETER_CIRCULAR",
        ParameterMethodName = "PARAMETER_METHOD_NAME",
        ParameterNameRepeat = "PARAMETER_NAME_REPEAT",
        ParameterNoDefault = "PARAMETER_NO_DEFAULT",
        ParameterNoDefaultKw = "PARAMETER_NO_DEFAULT_KW",
        ParameterNumberedReserved = "PARAMETER_NUMBERED_RESERVED",
        ParameterOrder = "PARAMETER_ORDER",
        ParameterSplatMulti = "PARAMETER_SPLAT_MULTI",
        ParameterStar = "PARAMETER_STAR",
        ParameterUnexpectedFwd = "PARAMETER_UNEXPECTED_FWD",
        ParameterWildLooseComma = "PARAMETER_WILD_LOOSE_COMMA",
        PatternExpressionAfterBracket = "PATTERN_EXPRESSION_AFTER_BRACKET",
        PatternExpressionAfterComma = "PATTERN_EXPRESSION_AFTER_COMMA",
        PatternExpressionAfterHrocket = "PATTERN_EXPRESSION_AFTER_HROCKET",
        PatternExpressionAfterIn = "PATTERN_EXPRESSION_AFTER_IN",
        PatternExpressionAfterKey = "PATTERN_EXPRESSION_AFTER_KEY",
        PatternExpressionAfterParen = "PATTERN_EXPRESSION_AFTER_PAREN",
        PatternExpressionAfterPin = "PATTERN_EXPRESSION_AFTER_PIN",
        PatternExpressionAfterPipe = "PATTERN_EXPRESSION_AFTER_PIPE",
        PatternExpressionAfterRange = "PATTERN_EXPRESSION_AFTER_RANGE",
        PatternExpressionAfterRest = "PATTERN_EXPRESSION_AFTER_REST",
        PatternHashKey = "PATTERN_HASH_KEY",
        PatternHashKeyLabel = "PATTERN_HASH_KEY_LABEL",
        PatternIdentAfterHrocket = "PATTERN_IDENT_AFTER_HROCKET",
        PatternLabelAfterComma = "PATTERN_LABEL_AFTER_COMMA",
        PatternRest = "PATTERN_REST",
        PatternTermBrace = "PATTERN_TERM_BRACE",
        PatternTermBracket = "PATTERN_TERM_BRACKET",
        PatternTermParen = "PATTERN_TERM_PAREN",
        PipepipeeqMultiAssign = "PIPEPIPEEQ_MULTI_ASSIGN",
        RegexpTerm = "REGEXP_TERM",
        RescueExpression = "RESCUE_EXPRESSION",
        RescueModifierValue = "RESCUE_MODIFIER_VALUE",
        RescueTerm = "RESCUE_TERM",
        RescueVariable = "RESCUE_VARIABLE",
        ReturnInvalid = "RETURN_INVALID",
        SingletonForLiterals = "SINGLETON_FOR_LITERALS",
        StatementAlias = "STATEMENT_ALIAS",
        StatementPostexeEnd = "STATEMENT_POSTEXE_END",
        StatementPreexeBegin = "STATEMENT_PREEXE_BEGIN",
        StatementUndef = "STATEMENT_UNDEF",
        StringConcatenation = "STRING_CONCATENATION",
        StringInterpolatedTerm = "STRING_INTERPOLATED_TERM",
        StringLiteralEof = "STRING_LITERAL_EOF",
        StringLiteralTerm = "STRING_LITERAL_TERM",
        SymbolInvalid = "SYMBOL_INVALID",
        SymbolTermDynamic = "SYMBOL_TERM_DYNAMIC",
        SymbolTermInterpolated = "SYMBOL_TERM_INTERPOLATED",
        TernaryColon = "TERNARY_COLON",
        TernaryExpressionFalse = "TERNARY_EXPRESSION_FALSE",
        TernaryExpressionTrue = "TERNARY_EXPRESSION_TRUE",
        UnaryReceiver = "UNARY_RECEIVER",
        UndefArgument = "UNDEF_ARGUMENT",
        UntilTerm = "UNTIL_TERM",
        VoidExpression = "VOID_EXPRESSION",
        WhileTerm = "WHILE_TERM",
        WriteTargetInMethod = "WRITE_TARGET_IN_METHOD",
        WriteTargetReadonly = "WRITE_TARGET_READONLY",
        WriteTargetUnexpected = "WRITE_TARGET_UNEXPECTED",
        XstringTerm = "XSTRING_TERM",
    }
}

diagnostic_kinds! {
    /// Syntax warning kinds.
    pub enum WarningKind {
        AmbiguousFirstArgumentMinus = "AMBIGUOUS_FIRST_ARGUMENT_MINUS",
        AmbiguousFirstArgumentPlus = "AMBIGUOUS_FIRST_ARGUMENT_PLUS",
        AmbiguousPrefixStar = "AMBIGUOUS_PREFIX_STAR",
        AmbiguousSlash = "AMBIGUOUS_SLASH",
        DotDotDotEol = "DOT_DOT_DOT_EOL",
        EqualInConditional = "EQUAL_IN_CONDITIONAL",
        EndInMethod = "END_IN_METHOD",
        DuplicatedHashKey = "DUPLICATED_HASH_KEY",
        DuplicatedWhenClause = "DUPLICATED_WHEN_CLAUSE",
        FloatOutOfRange = "FLOAT_OUT_OF_RANGE",
        IntegerInFlipFlop = "INTEGER_IN_FLIP_FLOP",
        KeywordEol = "KEYWORD_EOL",
    }
}

/// Severity of a syntax error.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub enum ErrorLevel {
    /// The source cannot be evaluated.
    Fatal,
    /// Raised as an `ArgumentError` by the host.
    Argument,
    /// Raised as a `LoadError` by the host.
    Load,
    /// A level this decoder does not know; the raw byte is kept.
    Other(u8),
}

impl From<u8> for ErrorLevel {
    fn from(level: u8) -> Self {
        match level {
            0 => ErrorLevel::Fatal,
            1 => ErrorLevel::Argument,
            2 => ErrorLevel::Load,
            other => ErrorLevel::Other(other),
        }
    }
}

/// Severity of a syntax warning.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub enum WarningLevel {
    /// Always reported.
    Default,
    /// Reported only in verbose mode.
    Verbose,
    Other(u8),
}

impl From<u8> for WarningLevel {
    fn from(level: u8) -> Self {
        match level {
            0 => WarningLevel::Default,
            1 => WarningLevel::Verbose,
            other => WarningLevel::Other(other),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct SyntaxError {
    pub kind: ErrorKind,
    pub message: String,
    pub location: Location,
    pub level: ErrorLevel,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct SyntaxWarning {
    pub kind: WarningKind,
    pub message: String,
    pub location: Location,
    pub level: WarningLevel,
}

impl Display for SyntaxError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}: error {}: {}", self.location, self.kind, self.message)
    }
}

impl Display for SyntaxWarning {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}: warning {}: {}", self.location, self.kind, self.message)
    }
}
