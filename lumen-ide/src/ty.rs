//! Semantic type descriptors for completion.
//!
//! These are the types the solver reports for expressions at the completion
//! point. They carry just enough structure for the completion layer: the
//! collector deduplicates candidates by structural equality, and the lookup
//! engine relates candidate result types to expected types.
//!
//! Nominal types hold interned name symbols; rendering to text therefore
//! needs the interner owned by the completion request.

use string_interner::DefaultStringInterner;

use crate::Symbol;

/// A semantic type as seen by the completion layer.
///
/// Equality and hashing are structural, which is exactly the notion of
/// "duplicate" the result collector uses.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Type {
    kind: TypeKind,
}

/// The shape of a [`Type`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// A built-in primitive type.
    Primitive(PrimitiveTy),
    /// A nominal type, possibly applied to type arguments.
    Named { name: Symbol, args: Vec<Type> },
    /// A tuple type.
    Tuple(Vec<Type>),
    /// A function type.
    Fn { params: Vec<Type>, ret: Box<Type> },
    /// The unknown type. Produced when a solution has no binding for the
    /// completion expression; participates in deduplication like any other
    /// type.
    Error,
}

/// Built-in primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveTy {
    Unit,
    Bool,
    Int,
    Float,
    Str,
}

impl PrimitiveTy {
    fn name(self) -> &'static str {
        match self {
            PrimitiveTy::Unit => "Unit",
            PrimitiveTy::Bool => "Bool",
            PrimitiveTy::Int => "Int",
            PrimitiveTy::Float => "Float",
            PrimitiveTy::Str => "Str",
        }
    }
}

impl Type {
    /// Create a type from a kind.
    pub fn new(kind: TypeKind) -> Self {
        Self { kind }
    }

    /// The kind of this type.
    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }

    pub fn unit() -> Self {
        Self::new(TypeKind::Primitive(PrimitiveTy::Unit))
    }

    pub fn bool() -> Self {
        Self::new(TypeKind::Primitive(PrimitiveTy::Bool))
    }

    pub fn int() -> Self {
        Self::new(TypeKind::Primitive(PrimitiveTy::Int))
    }

    pub fn float() -> Self {
        Self::new(TypeKind::Primitive(PrimitiveTy::Float))
    }

    pub fn str() -> Self {
        Self::new(TypeKind::Primitive(PrimitiveTy::Str))
    }

    /// A nominal type applied to the given arguments.
    pub fn named(name: Symbol, args: Vec<Type>) -> Self {
        Self::new(TypeKind::Named { name, args })
    }

    pub fn tuple(elements: Vec<Type>) -> Self {
        Self::new(TypeKind::Tuple(elements))
    }

    pub fn func(params: Vec<Type>, ret: Type) -> Self {
        Self::new(TypeKind::Fn {
            params,
            ret: Box::new(ret),
        })
    }

    /// The unknown type.
    pub fn error() -> Self {
        Self::new(TypeKind::Error)
    }

    /// Whether this is the unknown type.
    pub fn is_error(&self) -> bool {
        matches!(self.kind, TypeKind::Error)
    }

    /// Whether this is the unit type.
    pub fn is_unit(&self) -> bool {
        matches!(self.kind, TypeKind::Primitive(PrimitiveTy::Unit))
    }

    /// Render this type for display, resolving name symbols through the
    /// request's interner.
    pub fn display(&self, interner: &DefaultStringInterner) -> String {
        match &self.kind {
            TypeKind::Primitive(p) => p.name().to_string(),
            TypeKind::Named { name, args } => {
                let base = interner.resolve(*name).unwrap_or("<unknown>");
                if args.is_empty() {
                    base.to_string()
                } else {
                    let args: Vec<_> = args.iter().map(|a| a.display(interner)).collect();
                    format!("{}<{}>", base, args.join(", "))
                }
            }
            TypeKind::Tuple(elements) => {
                let elements: Vec<_> = elements.iter().map(|e| e.display(interner)).collect();
                format!("({})", elements.join(", "))
            }
            TypeKind::Fn { params, ret } => {
                let params: Vec<_> = params.iter().map(|p| p.display(interner)).collect();
                format!("fn({}) -> {}", params.join(", "), ret.display(interner))
            }
            TypeKind::Error => "<error>".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_equality() {
        assert_eq!(Type::int(), Type::int());
        assert_ne!(Type::int(), Type::float());
        assert_eq!(
            Type::tuple(vec![Type::int(), Type::str()]),
            Type::tuple(vec![Type::int(), Type::str()]),
        );
        assert_ne!(
            Type::tuple(vec![Type::int(), Type::str()]),
            Type::tuple(vec![Type::str(), Type::int()]),
        );
        assert_eq!(Type::error(), Type::error());
    }

    #[test]
    fn named_equality_is_by_symbol_and_args() {
        let mut interner: DefaultStringInterner = DefaultStringInterner::new();
        let list = interner.get_or_intern("List");
        let map = interner.get_or_intern("Map");

        assert_eq!(
            Type::named(list, vec![Type::int()]),
            Type::named(list, vec![Type::int()]),
        );
        assert_ne!(
            Type::named(list, vec![Type::int()]),
            Type::named(list, vec![Type::str()]),
        );
        assert_ne!(
            Type::named(list, vec![Type::int()]),
            Type::named(map, vec![Type::int()]),
        );
    }

    #[test]
    fn display_renders_nested_types() {
        let mut interner: DefaultStringInterner = DefaultStringInterner::new();
        let list = interner.get_or_intern("List");

        let ty = Type::func(
            vec![Type::named(list, vec![Type::int()])],
            Type::tuple(vec![Type::bool(), Type::str()]),
        );
        assert_eq!(ty.display(&interner), "fn(List<Int>) -> (Bool, Str)");
    }
}
