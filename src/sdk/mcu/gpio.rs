use crate::port::{PinDirection, PinLevel, PinMode, PinResistor, PortRegisters};
use crate::sdk::mcu::register::{
    read_reg_gpio_afsel, read_reg_gpio_amsel, read_reg_gpio_cr, read_reg_gpio_den,
    read_reg_gpio_dir, read_reg_gpio_pctl, read_reg_gpio_pdr, read_reg_gpio_pur,
    read_reg_sysctl_prgpio, read_reg_sysctl_rcgcgpio, write_reg_gpio_afsel, write_reg_gpio_amsel,
    write_reg_gpio_cr, write_reg_gpio_data, write_reg_gpio_den, write_reg_gpio_dir,
    write_reg_gpio_lock, write_reg_gpio_pctl, write_reg_gpio_pdr, write_reg_gpio_pur,
    write_reg_sysctl_rcgcgpio, FLD_GPIO_PORT, GPIO_LOCK_KEY, GPIO_PCTL_FIELD_BITS,
    GPIO_PCTL_FIELD_MASK, GPIO_PORT_BASE,
};
use crate::{BIT, BM_ASSIGN, BM_CLR, BM_IS_SET, BM_SET};

/// Register-level access to the TM4C123 GPIO blocks on the APB aperture.
#[derive(Clone, Copy, Debug, Default)]
pub struct Tm4cGpio;

fn base(port: u8) -> u32 {
    GPIO_PORT_BASE[usize::from(port)]
}

// Read-modify-write of one pin's bit in a per-port register.
fn assign_bit(read: fn(u32) -> u32, write: fn(u32, u32), port: u8, pin: u8, on: bool) {
    let base = base(port);
    let mut val = read(base);
    BM_ASSIGN!(val, BIT!(pin), on);
    write(val, base);
}

impl PortRegisters for Tm4cGpio {
    fn enable_port_clock(&self, port: u8) {
        let mask = FLD_GPIO_PORT::of(port).bits();
        write_reg_sysctl_rcgcgpio(read_reg_sysctl_rcgcgpio() | mask);
        while !BM_IS_SET!(read_reg_sysctl_prgpio(), mask) {}
    }

    fn set_direction(&self, port: u8, pin: u8, direction: PinDirection) {
        assign_bit(read_reg_gpio_dir, write_reg_gpio_dir, port, pin, direction == PinDirection::Output);
    }

    fn direction(&self, port: u8, pin: u8) -> PinDirection {
        if BM_IS_SET!(read_reg_gpio_dir(base(port)), BIT!(pin)) {
            PinDirection::Output
        } else {
            PinDirection::Input
        }
    }

    fn set_pull(&self, port: u8, pin: u8, resistor: PinResistor) {
        assign_bit(read_reg_gpio_pur, write_reg_gpio_pur, port, pin, resistor == PinResistor::PullUp);
        assign_bit(read_reg_gpio_pdr, write_reg_gpio_pdr, port, pin, resistor == PinResistor::PullDown);
    }

    fn set_output_level(&self, port: u8, pin: u8, level: PinLevel) {
        // Masked data access, only this pin's bit is written
        let mask: u32 = BIT!(pin);
        let value = if level == PinLevel::High { mask } else { 0 };
        write_reg_gpio_data(value, base(port) + (mask << 2));
    }

    fn set_function(&self, port: u8, pin: u8, mode: PinMode) {
        let base = base(port);
        let shift = u32::from(pin) * GPIO_PCTL_FIELD_BITS;
        let mut pctl = read_reg_gpio_pctl(base);
        BM_CLR!(pctl, GPIO_PCTL_FIELD_MASK << shift);
        if let Some(function) = mode.alternate_function() {
            BM_SET!(pctl, u32::from(function) << shift);
        }
        write_reg_gpio_pctl(pctl, base);

        assign_bit(read_reg_gpio_afsel, write_reg_gpio_afsel, port, pin, mode != PinMode::DigitalIo);
        assign_bit(read_reg_gpio_amsel, write_reg_gpio_amsel, port, pin, mode == PinMode::Analog);
    }

    fn set_digital_enable(&self, port: u8, pin: u8, enabled: bool) {
        assign_bit(read_reg_gpio_den, write_reg_gpio_den, port, pin, enabled);
    }

    fn requires_unlock(&self, port: u8, pin: u8) -> bool {
        // PC0..PC3 (JTAG/SWD), PD7 and PF0 (NMI)
        matches!((port, pin), (2, 0..=3) | (3, 7) | (5, 0))
    }

    fn unlock(&self, port: u8, pin: u8) {
        let base = base(port);
        write_reg_gpio_lock(GPIO_LOCK_KEY, base);
        write_reg_gpio_cr(read_reg_gpio_cr(base) | BIT!(pin), base);
    }

    fn lock(&self, port: u8) {
        write_reg_gpio_lock(0, base(port));
    }
}
