use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::evaluator::{
        core::{EvalResult, Evaluator},
        function::{builtin, random, sum},
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the evaluated arguments positionally. Arity is not
/// checked: an absent argument reads as `NaN` and surplus arguments are
/// ignored, so a builtin never fails.
pub type BuiltinFn = fn(&[f64]) -> f64;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - a signature shown in listings,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (table entry),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                signature: $signature:literal,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// One entry of the builtin function table.
        #[derive(Debug)]
        pub struct BuiltinDef {
            /// Lower-case name the function is called by.
            pub name:      &'static str,
            /// Human readable parameter list, e.g. `atan2(y, x)`.
            pub signature: &'static str,
            /// Implementation.
            pub func:      BuiltinFn,
        }
        /// Every builtin, in listing order.
        pub static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, signature: $signature, func: $func },
            )*
        ];
        /// Names of every builtin, in listing order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"   => { signature: "sin(x)",                 func: builtin::sin },
    "cos"   => { signature: "cos(x)",                 func: builtin::cos },
    "tan"   => { signature: "tan(x)",                 func: builtin::tan },
    "cot"   => { signature: "cot(x)",                 func: builtin::cot },
    "asin"  => { signature: "asin(x)",                func: builtin::asin },
    "acos"  => { signature: "acos(x)",                func: builtin::acos },
    "atan"  => { signature: "atan(x)",                func: builtin::atan },
    "atan2" => { signature: "atan2(y, x)",            func: builtin::atan2 },
    "sqrt"  => { signature: "sqrt(x)",                func: builtin::sqrt },
    "exp"   => { signature: "exp(x)",                 func: builtin::exp },
    "log"   => { signature: "log(x)",                 func: builtin::log },
    "floor" => { signature: "floor(x)",               func: builtin::floor },
    "round" => { signature: "round(x)",               func: builtin::round },
    "ceil"  => { signature: "ceil(x)",                func: builtin::ceil },
    "rand"  => { signature: "rand()",                 func: random::rand },
    "sum"   => { signature: "sum(start, stop, step?)", func: sum::sum },
}

/// Looks up a builtin by its lower-case name.
///
/// # Example
/// ```
/// use matheval::interpreter::evaluator::function::core::lookup;
///
/// let sqrt = lookup("sqrt").unwrap();
/// assert_eq!(sqrt(&[16.0]), 4.0);
/// assert!(lookup("SQRT").is_none());
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<BuiltinFn> {
    BUILTIN_TABLE.iter()
                 .find(|def| def.name == name)
                 .map(|def| def.func)
}

/// Signatures of every builtin, in listing order.
pub fn signatures() -> impl Iterator<Item = &'static str> {
    BUILTIN_TABLE.iter().map(|def| def.signature)
}

/// Reads the argument at `index`, or `NaN` when the caller passed fewer.
#[must_use]
pub fn arg(args: &[f64], index: usize) -> f64 {
    args.get(index).copied().unwrap_or(f64::NAN)
}

impl Evaluator<'_> {
    /// Evaluates a function call.
    ///
    /// The callee is resolved first; only then are the arguments evaluated,
    /// left to right, stopping at the first failure. The function is applied
    /// to the resulting values positionally.
    ///
    /// # Parameters
    /// - `callee`: The callee node, normally a name.
    /// - `arguments`: Unevaluated argument nodes.
    ///
    /// # Returns
    /// The function result, or [`RuntimeError::UnknownFunction`] naming the
    /// callee if no builtin matches. A callee that is not a plain name is
    /// reported by its tree rendering.
    pub(in crate::interpreter::evaluator) fn eval_call(&self,
                                                       callee: &Node,
                                                       arguments: &[Node])
                                                       -> EvalResult<f64> {
        let Some(func) = callee.as_name().and_then(lookup) else {
            let name = callee.as_name()
                             .map_or_else(|| callee.to_string(), str::to_string);
            return Err(RuntimeError::UnknownFunction { name });
        };

        let values = arguments.iter()
                              .map(|argument| self.eval(argument))
                              .collect::<EvalResult<Vec<f64>>>()?;

        Ok(func(&values))
    }
}
