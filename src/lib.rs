//! Notation polonaise : infixe -> préfixe entièrement parenthésé, puis calcul.
//!
//! ```
//! use notation_polonaise::noyau::{convert, evaluate};
//!
//! let prefixe = convert("10 / 2^3").unwrap();
//! assert_eq!(prefixe, "(/ 10 (^ 2 3 ))");
//! assert_eq!(evaluate(&prefixe).unwrap(), 1.25);
//! ```

#[cfg(not(target_arch = "wasm32"))]
pub mod journal;
pub mod noyau;
