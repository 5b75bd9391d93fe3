//! Control loop task

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};

use tiller_core::Controller;

use crate::io::{AngleAdc, ServoPwm, UartLink};

/// The single control task: one `tick` per loop period
///
/// The ticker provides the end-of-tick pacing; if an iteration overruns,
/// the next one runs immediately rather than sleeping.
#[embassy_executor::task]
pub async fn control_task(
    mut controller: Controller<ServoPwm<'static>, AngleAdc<'static>, UartLink>,
) {
    let period = controller.config().loop_period_ms();
    info!("Control task started ({} ms period)", period);

    let mut ticker = Ticker::every(Duration::from_millis(u64::from(period)));
    let start = Instant::now();

    loop {
        let now_ms = start.elapsed().as_millis() as u32;
        controller.tick(now_ms);
        ticker.next().await;
    }
}
