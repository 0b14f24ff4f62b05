use bitflags::bitflags;
use crate::BIT;
extern crate core;
extern crate paste;

/// Read/write accessors for a register that repeats at a per-block base address.
///
/// `regrw_idx!(reg_gpio_dir, 0x400, u32)` produces `read_reg_gpio_dir(base)` and
/// `write_reg_gpio_dir(value, base)`, accessing `base + 0x400`.
#[macro_export]
macro_rules! regrw_idx {
    ( $x:ident, $a:expr, $s:ty ) => {
        paste::paste! {
            #[cfg_attr(test, mry::mry)]
            pub fn [<read_ $x>](i: u32) -> $s {
                unsafe {
                    return core::ptr::read_volatile(($a + i) as *mut $s)
                }
            }

            #[cfg_attr(test, mry::mry)]
            pub fn [<write_ $x>](value: $s, i: u32) {
                unsafe {
                    core::ptr::write_volatile(($a + i) as *mut $s, value)
                }
            }
        }
    };
}

/// Read/write accessors for a register at a fixed address.
#[macro_export]
macro_rules! regrw {
    ( $x:ident, $a:expr, $s:ty ) => {
        paste::paste! {
            #[cfg_attr(test, mry::mry)]
            pub fn [<read_ $x>]() -> $s {
                unsafe {
                    return core::ptr::read_volatile(($a) as *mut $s)
                }
            }

            #[cfg_attr(test, mry::mry)]
            pub fn [<write_ $x>](value: $s) {
                unsafe {
                    core::ptr::write_volatile(($a) as *mut $s, value)
                }
            }
        }
    };
}

/****************************************************
 system control: begin  addr : 0x400FE000
 *****************************************************/
pub const SYSCTL_BASE: u32 = 0x400F_E000;

// Run mode clock gating for the GPIO ports
regrw!(reg_sysctl_rcgcgpio, SYSCTL_BASE + 0x608, u32);
// Peripheral ready for the GPIO ports
regrw!(reg_sysctl_prgpio, SYSCTL_BASE + 0xA08, u32);

bitflags! {
    /// One bit per GPIO port in RCGCGPIO / PRGPIO.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct FLD_GPIO_PORT: u32 {
        const R0 = BIT!(0);     // Port A
        const R1 = BIT!(1);     // Port B
        const R2 = BIT!(2);     // Port C
        const R3 = BIT!(3);     // Port D
        const R4 = BIT!(4);     // Port E
        const R5 = BIT!(5);     // Port F
    }
}

impl FLD_GPIO_PORT {
    pub const fn of(port: u8) -> FLD_GPIO_PORT {
        FLD_GPIO_PORT::from_bits_truncate(BIT!(port))
    }
}

/****************************************************
 gpio regs struct: APB aperture
 *****************************************************/
pub const GPIO_PORTA_BASE: u32 = 0x4000_4000;
pub const GPIO_PORTB_BASE: u32 = 0x4000_5000;
pub const GPIO_PORTC_BASE: u32 = 0x4000_6000;
pub const GPIO_PORTD_BASE: u32 = 0x4000_7000;
pub const GPIO_PORTE_BASE: u32 = 0x4002_4000;
pub const GPIO_PORTF_BASE: u32 = 0x4002_5000;

pub const GPIO_PORT_BASE: [u32; 6] = [
    GPIO_PORTA_BASE,
    GPIO_PORTB_BASE,
    GPIO_PORTC_BASE,
    GPIO_PORTD_BASE,
    GPIO_PORTE_BASE,
    GPIO_PORTF_BASE,
];

// Writing this to GPIOLOCK opens GPIOCR for writes.
pub const GPIO_LOCK_KEY: u32 = 0x4C4F_434B;

// GPIODATA is bit-addressed: address bits [9:2] select which pins a write touches, so the
// index passed to the accessor is `base + (mask << 2)`.
regrw_idx!(reg_gpio_data, 0x000, u32);
regrw_idx!(reg_gpio_dir, 0x400, u32);
regrw_idx!(reg_gpio_afsel, 0x420, u32);
regrw_idx!(reg_gpio_pur, 0x510, u32);
regrw_idx!(reg_gpio_pdr, 0x514, u32);
regrw_idx!(reg_gpio_den, 0x51C, u32);
regrw_idx!(reg_gpio_lock, 0x520, u32);
regrw_idx!(reg_gpio_cr, 0x524, u32);
regrw_idx!(reg_gpio_amsel, 0x528, u32);
regrw_idx!(reg_gpio_pctl, 0x52C, u32);

/// Width of one pin's field in GPIOPCTL.
pub const GPIO_PCTL_FIELD_BITS: u32 = 4;
pub const GPIO_PCTL_FIELD_MASK: u32 = 0xF;
