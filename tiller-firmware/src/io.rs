//! Hardware boundary implementations
//!
//! Binds the tiller-core traits to RP2040 peripherals: PWM for the servo
//! pulse train, ADC for the angle-feedback wire, and buffered UART for the
//! host link.

use embassy_rp::adc::{Adc, Blocking, Channel};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_rp::uart::{BufferedUartRx, BufferedUartTx};
use embedded_io::{Read, ReadReady, Write};

use tiller_core::{Actuator, AngleSensor, Transport};

/// Servo output on a PWM slice configured for 1 µs counts at 50 Hz
///
/// With the 125 MHz system clock, a divider of 125 gives one count per
/// microsecond; a top of 19_999 gives the 20 ms servo frame.
pub struct ServoPwm<'d> {
    pwm: Pwm<'d>,
    config: PwmConfig,
    min_us: u16,
    max_us: u16,
}

impl<'d> ServoPwm<'d> {
    pub fn new(pwm: Pwm<'d>, config: PwmConfig, min_us: u16, max_us: u16) -> Self {
        Self {
            pwm,
            config,
            min_us,
            max_us,
        }
    }
}

impl Actuator for ServoPwm<'_> {
    fn set_pulse_width_us(&mut self, us: u16) {
        self.config.compare_a = us.clamp(self.min_us, self.max_us);
        self.pwm.set_config(&self.config);
    }

    fn relax(&mut self) {
        // Zero compare means no pulses at all: the servo goes slack
        self.config.compare_a = 0;
        self.pwm.set_config(&self.config);
    }
}

/// Angle feedback from the servo's wiper wire on an ADC channel
pub struct AngleAdc<'d> {
    adc: Adc<'d, Blocking>,
    channel: Channel<'d>,
}

impl<'d> AngleAdc<'d> {
    pub fn new(adc: Adc<'d, Blocking>, channel: Channel<'d>) -> Self {
        Self { adc, channel }
    }
}

impl AngleSensor for AngleAdc<'_> {
    fn read_angle(&mut self) -> i16 {
        // 12-bit sample; a read error reports center rather than stalling
        self.adc.blocking_read(&mut self.channel).unwrap_or(0) as i16
    }
}

/// Host link over the buffered UART
pub struct UartLink {
    rx: BufferedUartRx,
    tx: BufferedUartTx,
}

impl UartLink {
    pub fn new(rx: BufferedUartRx, tx: BufferedUartTx) -> Self {
        Self { rx, tx }
    }
}

impl Transport for UartLink {
    fn read(&mut self, buf: &mut [u8]) -> usize {
        // Drain only what the interrupt handler already buffered; the
        // control loop must never block on the wire
        match self.rx.read_ready() {
            Ok(true) => self.rx.read(buf).unwrap_or(0),
            _ => 0,
        }
    }

    fn write(&mut self, bytes: &[u8]) {
        if self.tx.write_all(bytes).is_err() {
            defmt::warn!("UART TX error, dropping {} bytes", bytes.len());
        }
    }
}
