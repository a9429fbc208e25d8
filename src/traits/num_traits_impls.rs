use std::num::FpCategory;

use num_traits::{
    Float as NumFloat, FloatConst, FromPrimitive, Num, NumCast, One, Signed, ToPrimitive, Zero,
};

use crate::dual::Dual;
use crate::term::Term;
use crate::Float;

// Traits whose bodies only lift constants or read the primal value are shared
// by `Dual<F>` and `Term<F>`.
macro_rules! impl_value_traits {
    ($t:ident, $value:ident) => {
        impl<F: Float> Zero for $t<F> {
            #[inline]
            fn zero() -> Self {
                $t::constant(F::zero())
            }
            #[inline]
            fn is_zero(&self) -> bool {
                self.$value().is_zero()
            }
        }

        impl<F: Float> One for $t<F> {
            #[inline]
            fn one() -> Self {
                $t::constant(F::one())
            }
        }

        impl<F: Float> Num for $t<F> {
            type FromStrRadixErr = F::FromStrRadixErr;
            fn from_str_radix(str: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
                F::from_str_radix(str, radix).map($t::constant)
            }
        }

        impl<F: Float> FromPrimitive for $t<F> {
            #[inline]
            fn from_i64(n: i64) -> Option<Self> {
                F::from_i64(n).map($t::constant)
            }
            #[inline]
            fn from_u64(n: u64) -> Option<Self> {
                F::from_u64(n).map($t::constant)
            }
            #[inline]
            fn from_f32(n: f32) -> Option<Self> {
                F::from_f32(n).map($t::constant)
            }
            #[inline]
            fn from_f64(n: f64) -> Option<Self> {
                F::from_f64(n).map($t::constant)
            }
        }

        impl<F: Float> ToPrimitive for $t<F> {
            #[inline]
            fn to_i64(&self) -> Option<i64> {
                self.$value().to_i64()
            }
            #[inline]
            fn to_u64(&self) -> Option<u64> {
                self.$value().to_u64()
            }
            #[inline]
            fn to_f32(&self) -> Option<f32> {
                self.$value().to_f32()
            }
            #[inline]
            fn to_f64(&self) -> Option<f64> {
                self.$value().to_f64()
            }
        }

        impl<F: Float> NumCast for $t<F> {
            #[inline]
            fn from<T: ToPrimitive>(n: T) -> Option<Self> {
                <F as NumCast>::from(n).map($t::constant)
            }
        }

        impl<F: Float> Signed for $t<F> {
            #[inline]
            fn abs(&self) -> Self {
                NumFloat::abs(*self)
            }
            #[inline]
            fn abs_sub(&self, other: &Self) -> Self {
                if self.$value() > other.$value() {
                    *self - *other
                } else {
                    Self::zero()
                }
            }
            #[inline]
            fn signum(&self) -> Self {
                NumFloat::signum(*self)
            }
            #[inline]
            fn is_positive(&self) -> bool {
                self.$value().is_sign_positive()
            }
            #[inline]
            fn is_negative(&self) -> bool {
                self.$value().is_sign_negative()
            }
        }

        impl<F: Float> FloatConst for $t<F> {
            fn E() -> Self { $t::constant(F::E()) }
            fn FRAC_1_PI() -> Self { $t::constant(F::FRAC_1_PI()) }
            fn FRAC_1_SQRT_2() -> Self { $t::constant(F::FRAC_1_SQRT_2()) }
            fn FRAC_2_PI() -> Self { $t::constant(F::FRAC_2_PI()) }
            fn FRAC_2_SQRT_PI() -> Self { $t::constant(F::FRAC_2_SQRT_PI()) }
            fn FRAC_PI_2() -> Self { $t::constant(F::FRAC_PI_2()) }
            fn FRAC_PI_3() -> Self { $t::constant(F::FRAC_PI_3()) }
            fn FRAC_PI_4() -> Self { $t::constant(F::FRAC_PI_4()) }
            fn FRAC_PI_6() -> Self { $t::constant(F::FRAC_PI_6()) }
            fn FRAC_PI_8() -> Self { $t::constant(F::FRAC_PI_8()) }
            fn LN_10() -> Self { $t::constant(F::LN_10()) }
            fn LN_2() -> Self { $t::constant(F::LN_2()) }
            fn LOG10_E() -> Self { $t::constant(F::LOG10_E()) }
            fn LOG2_E() -> Self { $t::constant(F::LOG2_E()) }
            fn PI() -> Self { $t::constant(F::PI()) }
            fn SQRT_2() -> Self { $t::constant(F::SQRT_2()) }
            fn TAU() -> Self { $t::constant(F::TAU()) }
            fn LOG10_2() -> Self { $t::constant(F::LOG10_2()) }
            fn LOG2_10() -> Self { $t::constant(F::LOG2_10()) }
        }
    };
}

impl_value_traits!(Dual, value);
impl_value_traits!(Term, value);

// ══════════════════════════════════════════════
//  Dual<F>
// ══════════════════════════════════════════════

impl<F: Float> NumFloat for Dual<F> {
    fn nan() -> Self { Dual::constant(F::nan()) }
    fn infinity() -> Self { Dual::constant(F::infinity()) }
    fn neg_infinity() -> Self { Dual::constant(F::neg_infinity()) }
    fn neg_zero() -> Self { Dual::constant(F::neg_zero()) }

    fn min_value() -> Self { Dual::constant(F::min_value()) }
    fn min_positive_value() -> Self { Dual::constant(F::min_positive_value()) }
    fn max_value() -> Self { Dual::constant(F::max_value()) }
    fn epsilon() -> Self { Dual::constant(F::epsilon()) }

    fn is_nan(self) -> bool { self.re.is_nan() }
    fn is_infinite(self) -> bool { self.re.is_infinite() }
    fn is_finite(self) -> bool { self.re.is_finite() }
    fn is_normal(self) -> bool { self.re.is_normal() }
    fn is_sign_positive(self) -> bool { self.re.is_sign_positive() }
    fn is_sign_negative(self) -> bool { self.re.is_sign_negative() }
    fn classify(self) -> FpCategory { self.re.classify() }

    fn floor(self) -> Self { Dual::floor(self) }
    fn ceil(self) -> Self { Dual::ceil(self) }
    fn round(self) -> Self { Dual::round(self) }
    fn trunc(self) -> Self { Dual::trunc(self) }
    fn fract(self) -> Self { Dual::fract(self) }
    fn abs(self) -> Self { Dual::abs(self) }
    fn signum(self) -> Self { Dual::signum(self) }

    fn mul_add(self, a: Self, b: Self) -> Self { Dual::mul_add(self, a, b) }

    fn recip(self) -> Self { Dual::recip(self) }
    fn powi(self, n: i32) -> Self { Dual::powi(self, n) }
    fn powf(self, n: Self) -> Self { Dual::powf(self, n) }
    fn sqrt(self) -> Self { Dual::sqrt(self) }
    fn cbrt(self) -> Self { Dual::cbrt(self) }

    fn exp(self) -> Self { Dual::exp(self) }
    fn exp2(self) -> Self { Dual::exp2(self) }
    fn exp_m1(self) -> Self { Dual::exp_m1(self) }
    fn ln(self) -> Self { Dual::ln(self) }
    fn log2(self) -> Self { Dual::log2(self) }
    fn log10(self) -> Self { Dual::log10(self) }
    fn ln_1p(self) -> Self { Dual::ln_1p(self) }
    fn log(self, base: Self) -> Self { Dual::log(self, base) }

    fn sin(self) -> Self { Dual::sin(self) }
    fn cos(self) -> Self { Dual::cos(self) }
    fn tan(self) -> Self { Dual::tan(self) }
    fn sin_cos(self) -> (Self, Self) { Dual::sin_cos(self) }
    fn asin(self) -> Self { Dual::asin(self) }
    fn acos(self) -> Self { Dual::acos(self) }
    fn atan(self) -> Self { Dual::atan(self) }
    fn atan2(self, other: Self) -> Self { Dual::atan2(self, other) }

    fn sinh(self) -> Self { Dual::sinh(self) }
    fn cosh(self) -> Self { Dual::cosh(self) }
    fn tanh(self) -> Self { Dual::tanh(self) }
    fn asinh(self) -> Self { Dual::asinh(self) }
    fn acosh(self) -> Self { Dual::acosh(self) }
    fn atanh(self) -> Self { Dual::atanh(self) }

    fn hypot(self, other: Self) -> Self { Dual::hypot(self, other) }

    fn max(self, other: Self) -> Self { Dual::max(self, other) }
    fn min(self, other: Self) -> Self { Dual::min(self, other) }

    fn abs_sub(self, other: Self) -> Self {
        if self.re > other.re { self - other } else { Self::zero() }
    }

    fn integer_decode(self) -> (u64, i16, i8) { self.re.integer_decode() }

    fn to_degrees(self) -> Self {
        let factor = F::to_degrees(F::one());
        Dual { re: self.re.to_degrees(), eps: self.eps * factor }
    }

    fn to_radians(self) -> Self {
        let factor = F::to_radians(F::one());
        Dual { re: self.re.to_radians(), eps: self.eps * factor }
    }
}

// ══════════════════════════════════════════════
//  Term<F>
// ══════════════════════════════════════════════

macro_rules! term_unary {
    ($($name:ident),* $(,)?) => {
        $(
            fn $name(self) -> Self { self.map(F::$name, Dual::$name) }
        )*
    };
}

macro_rules! term_binary {
    ($($name:ident),* $(,)?) => {
        $(
            fn $name(self, other: Self) -> Self { self.zip(other, F::$name, Dual::$name) }
        )*
    };
}

impl<F: Float> NumFloat for Term<F> {
    fn nan() -> Self { Term::Constant(F::nan()) }
    fn infinity() -> Self { Term::Constant(F::infinity()) }
    fn neg_infinity() -> Self { Term::Constant(F::neg_infinity()) }
    fn neg_zero() -> Self { Term::Constant(F::neg_zero()) }

    fn min_value() -> Self { Term::Constant(F::min_value()) }
    fn min_positive_value() -> Self { Term::Constant(F::min_positive_value()) }
    fn max_value() -> Self { Term::Constant(F::max_value()) }
    fn epsilon() -> Self { Term::Constant(F::epsilon()) }

    fn is_nan(self) -> bool { self.value().is_nan() }
    fn is_infinite(self) -> bool { self.value().is_infinite() }
    fn is_finite(self) -> bool { self.value().is_finite() }
    fn is_normal(self) -> bool { self.value().is_normal() }
    fn is_sign_positive(self) -> bool { self.value().is_sign_positive() }
    fn is_sign_negative(self) -> bool { self.value().is_sign_negative() }
    fn classify(self) -> FpCategory { self.value().classify() }

    term_unary!(
        floor, ceil, round, trunc, fract, abs, signum, recip, sqrt, cbrt, exp, exp2, exp_m1, ln,
        log2, log10, ln_1p, sin, cos, tan, asin, acos, atan, sinh, cosh, tanh, asinh, acosh,
        atanh,
    );

    term_binary!(powf, log, atan2, hypot);

    fn powi(self, n: i32) -> Self {
        self.map(|c| c.powi(n), |d| d.powi(n))
    }

    fn mul_add(self, a: Self, b: Self) -> Self {
        if self.is_constant() && a.is_constant() && b.is_constant() {
            Term::Constant(self.value().mul_add(a.value(), b.value()))
        } else {
            Term::Differentiable(self.to_dual().mul_add(a.to_dual(), b.to_dual()))
        }
    }

    fn sin_cos(self) -> (Self, Self) {
        match self {
            Term::Constant(c) => {
                let (s, co) = c.sin_cos();
                (Term::Constant(s), Term::Constant(co))
            }
            Term::Differentiable(d) => {
                let (s, co) = d.sin_cos();
                (Term::Differentiable(s), Term::Differentiable(co))
            }
        }
    }

    fn max(self, other: Self) -> Self {
        if self.value() >= other.value() { self } else { other }
    }

    fn min(self, other: Self) -> Self {
        if self.value() <= other.value() { self } else { other }
    }

    fn abs_sub(self, other: Self) -> Self {
        if self.value() > other.value() { self - other } else { Self::zero() }
    }

    fn integer_decode(self) -> (u64, i16, i8) { self.value().integer_decode() }

    term_unary!(to_degrees, to_radians);
}
