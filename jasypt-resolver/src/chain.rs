//! Ordered chain of expression resolvers.
//!
//! Each resolver either claims an expression and returns its value, or
//! declines with `None`. The chain asks them in registration order.

use crate::convert::ConversionService;
use crate::error::ResolveResult;
use crate::property::PropertyResolver;
use std::fmt::Display;
use std::str::FromStr;

/// One link in the resolver chain.
pub trait PropertyExpressionResolver: Send + Sync {
    /// Returns the resolved string, or `None` if the expression is not
    /// handled by this resolver.
    fn resolve_expression(
        &self,
        properties: &dyn PropertyResolver,
        expression: &str,
    ) -> ResolveResult<Option<String>>;
}

/// Resolvers consulted in order until one claims the expression.
#[derive(Default)]
pub struct ExpressionResolverChain {
    resolvers: Vec<Box<dyn PropertyExpressionResolver>>,
}

impl ExpressionResolverChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a resolver to the end of the chain.
    pub fn push(&mut self, resolver: impl PropertyExpressionResolver + 'static) {
        self.resolvers.push(Box::new(resolver));
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, resolver: impl PropertyExpressionResolver + 'static) -> Self {
        self.push(resolver);
        self
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }

    /// Resolves `expression` with the first resolver that claims it and
    /// converts the result to `T`.
    ///
    /// Errors stop the chain; later resolvers are not consulted.
    pub fn resolve<T, C>(
        &self,
        properties: &dyn PropertyResolver,
        conversion: &C,
        expression: &str,
    ) -> ResolveResult<Option<T>>
    where
        T: FromStr,
        T::Err: Display,
        C: ConversionService,
    {
        for resolver in &self.resolvers {
            if let Some(raw) = resolver.resolve_expression(properties, expression)? {
                return Ok(Some(conversion.convert(&raw)?));
            }
        }
        Ok(None)
    }
}

impl std::fmt::Debug for ExpressionResolverChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpressionResolverChain")
            .field("resolvers", &self.resolvers.len())
            .finish()
    }
}
