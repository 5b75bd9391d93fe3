//! Tiller - Steering Actuator Controller Firmware
//!
//! RP2040 firmware driving a single position actuator (hobby-servo class)
//! from commands received over UART, with telemetry and link-timeout safety
//! in the other direction.
//!
//! Pin assignment:
//! - GPIO0/GPIO1: UART0 TX/RX, host link at 115200 8N1
//! - GPIO4: servo pulse output (PWM slice 2, channel A)
//! - GPIO26: angle feedback wire (ADC0)

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::Pull;
use embassy_rp::peripherals::UART0;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use fixed::traits::ToFixed;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use tiller_core::{Controller, ControllerConfig};

use crate::io::{AngleAdc, ServoPwm, UartLink};

mod io;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Tiller firmware starting...");

    let p = embassy_rp::init(Default::default());
    let config = ControllerConfig::default();

    // Host link on UART0 (115200 baud default)
    let uart_config = UartConfig::default();
    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 256]);
    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();
    info!("UART initialized for host link");

    // Servo pulse train: 125 MHz / 125 = 1 count per µs, top 19_999 = 50 Hz.
    // compare_a starts at 0, which is the relaxed (no pulses) state.
    let mut pwm_config = PwmConfig::default();
    pwm_config.divider = 125i32.to_fixed();
    pwm_config.top = 19_999;
    pwm_config.compare_a = 0;
    let pwm = Pwm::new_output_a(p.PWM_SLICE2, p.PIN_4, pwm_config.clone());
    let servo = ServoPwm::new(pwm, pwm_config, config.pulse_min_us, config.pulse_max_us);
    info!("Servo PWM initialized");

    // Angle feedback wire on ADC0
    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let channel = Channel::new_pin(p.PIN_26, Pull::None);
    let angle = AngleAdc::new(adc, channel);
    info!("ADC initialized");

    let controller = Controller::new(config, 0, servo, angle, UartLink::new(rx, tx));

    unwrap!(spawner.spawn(tasks::control_task(controller)));
    info!("Tiller running");
}
