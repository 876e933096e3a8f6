use core::fmt;

use super::Type;

/// Parameter types plus a return type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    params: Vec<Type>,
    ret: Type,
}

impl Signature {
    pub fn new(params: Vec<Type>, ret: Type) -> Self {
        Signature { params, ret }
    }

    /// `count` parameters of the same type.
    pub fn uniform(param: Type, count: usize, ret: Type) -> Self {
        Signature {
            params: vec![param; count],
            ret,
        }
    }

    /// `(Object × count) -> ret`.
    pub fn generic(count: usize, ret: Type) -> Self {
        Signature::uniform(Type::Object, count, ret)
    }

    pub fn params(&self) -> &[Type] {
        &self.params
    }

    pub fn param(&self, index: usize) -> Option<&Type> {
        self.params.get(index)
    }

    pub fn ret(&self) -> &Type {
        &self.ret
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Total argument slots, counting wide kinds twice.
    pub fn slot_count(&self) -> usize {
        self.params.iter().map(|p| p.kind().slot_width()).sum()
    }

    pub fn with_return(&self, ret: Type) -> Self {
        Signature {
            params: self.params.clone(),
            ret,
        }
    }

    /// Replaces the parameters in `range` by `replacement`.
    pub fn splice_params(
        &self,
        range: core::ops::Range<usize>,
        replacement: &[Type],
    ) -> Self {
        let mut params = Vec::with_capacity(self.params.len() + replacement.len());
        params.extend_from_slice(&self.params[..range.start]);
        params.extend_from_slice(replacement);
        params.extend_from_slice(&self.params[range.end..]);
        Signature {
            params,
            ret: self.ret.clone(),
        }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", param)?;
        }
        write!(f, "){}", self.ret)
    }
}
