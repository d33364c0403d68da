use crate::flags::{
    ArgumentsNodeFlags, CallNodeFlags, IntegerBaseFlags, LoopFlags, ParameterFlags, RangeFlags,
    RegularExpressionFlags, StringFlags,
};
use crate::nodes::{
    ArgumentsNode, BlockParameterNode, CallNode, DefNode, IntegerNode,
    InterpolatedRegularExpressionNode, KeywordRestParameterNode, Node, ProgramNode, RangeNode,
    RegularExpressionNode, RequiredParameterNode, RestParameterNode, StatementsNode, StringNode,
    UntilNode, WhileNode,
};

impl Node {
    /// Returns `true` for nodes the engine inserted in place of missing syntax.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Node::Missing(_))
    }

    /// Returns `true` when the node has no child nodes.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children().is_empty()
    }
}

impl ProgramNode {
    /// Top-level statement list. Always a statements node for well-formed input.
    #[must_use]
    pub fn statements(&self) -> Option<&StatementsNode> {
        match &*self.statements {
            Node::Statements(statements) => Some(statements),
            _ => None,
        }
    }
}

impl CallNode {
    #[must_use]
    pub fn is_safe_navigation(&self) -> bool {
        self.flags.contains(CallNodeFlags::SAFE_NAVIGATION)
    }

    #[must_use]
    pub fn is_variable_call(&self) -> bool {
        self.flags.contains(CallNodeFlags::VARIABLE_CALL)
    }

    #[must_use]
    pub fn is_attribute_write(&self) -> bool {
        self.flags.contains(CallNodeFlags::ATTRIBUTE_WRITE)
    }

    /// Positional and keyword arguments, empty when the call has none.
    #[must_use]
    pub fn argument_nodes(&self) -> &[Node] {
        match self.arguments.as_deref() {
            Some(Node::Arguments(arguments)) => &arguments.arguments,
            _ => &[],
        }
    }
}

impl ArgumentsNode {
    #[must_use]
    pub fn contains_keyword_splat(&self) -> bool {
        self.flags.contains(ArgumentsNodeFlags::CONTAINS_KEYWORD_SPLAT)
    }
}

impl DefNode {
    /// `def self.foo` and `def obj.foo`.
    #[must_use]
    pub fn is_singleton(&self) -> bool {
        self.receiver.is_some()
    }

    /// `def foo = expr`
    #[must_use]
    pub fn is_endless(&self) -> bool {
        self.equal_loc.is_some()
    }
}

impl IntegerNode {
    /// Radix of the literal as written, defaulting to 10.
    #[must_use]
    pub fn radix(&self) -> u32 {
        if self.flags.contains(IntegerBaseFlags::BINARY) {
            2
        } else if self.flags.contains(IntegerBaseFlags::OCTAL) {
            8
        } else if self.flags.contains(IntegerBaseFlags::HEXADECIMAL) {
            16
        } else {
            10
        }
    }
}

impl StringNode {
    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.flags.contains(StringFlags::FROZEN)
    }
}

impl RegularExpressionNode {
    #[must_use]
    pub fn is_ignore_case(&self) -> bool {
        self.flags.contains(RegularExpressionFlags::IGNORE_CASE)
    }
}

impl InterpolatedRegularExpressionNode {
    /// `/#{x}/o`: interpolation happens only once.
    #[must_use]
    pub fn is_once(&self) -> bool {
        self.flags.contains(RegularExpressionFlags::ONCE)
    }
}

impl RangeNode {
    #[must_use]
    pub fn is_exclude_end(&self) -> bool {
        self.flags.contains(RangeFlags::EXCLUDE_END)
    }
}

impl WhileNode {
    #[must_use]
    pub fn is_begin_modifier(&self) -> bool {
        self.flags.contains(LoopFlags::BEGIN_MODIFIER)
    }
}

impl UntilNode {
    #[must_use]
    pub fn is_begin_modifier(&self) -> bool {
        self.flags.contains(LoopFlags::BEGIN_MODIFIER)
    }
}

impl RequiredParameterNode {
    #[must_use]
    pub fn is_repeated_parameter(&self) -> bool {
        self.flags.contains(ParameterFlags::REPEATED_PARAMETER)
    }
}

impl RestParameterNode {
    /// Anonymous `*`.
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.name.is_none()
    }
}

impl KeywordRestParameterNode {
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.name.is_none()
    }
}

impl BlockParameterNode {
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.name.is_none()
    }
}
