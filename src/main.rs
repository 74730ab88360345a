#![no_std]
#![no_main]

use defmt_rtt as _;
use panic_probe as _;
use rtic::app;

#[app(device = rp_pico::hal::pac, peripherals = true, dispatchers = [SPI0_IRQ])]
mod app {
    use embedded_hal::digital::v2::ToggleableOutputPin;
    use rp_pico::hal::{
        clocks::{init_clocks_and_plls, Clock},
        fugit::RateExtU32,
        gpio::{
            bank0::{Gpio25, Gpio4, Gpio5},
            FunctionI2C, FunctionSio, Pin, PullDown, PullUp, SioOutput,
        },
        i2c::I2C,
        rtc::{DateTime, DateTimeFilter, DayOfWeek, RealTimeClock},
        sio::Sio,
        watchdog::Watchdog,
    };
    use ssd1306::{mode::BufferedGraphicsMode, prelude::*, I2CDisplayInterface, Ssd1306};
    use tz_watch::{config, BrokenDownTime, GraphicsSurface, WatchApp, WatchFace};

    type I2cBus = I2C<
        rp_pico::hal::pac::I2C0,
        (
            Pin<Gpio4, FunctionI2C, PullUp>,
            Pin<Gpio5, FunctionI2C, PullUp>,
        ),
    >;
    type DisplayType =
        Ssd1306<I2CInterface<I2cBus>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;
    type LedPin = Pin<Gpio25, FunctionSio<SioOutput>, PullDown>;

    // Shared resources (accessed by multiple tasks)
    #[shared]
    struct Shared {
        face: WatchFace,
    }

    // Local resources (accessed by single tasks)
    #[local]
    struct Local {
        display: DisplayType,
        led: LedPin,
        rtc: RealTimeClock,
    }

    #[init]
    fn init(ctx: init::Context) -> (Shared, Local, init::Monotonics) {
        let mut pac = ctx.device;
        let mut watchdog = Watchdog::new(pac.WATCHDOG);
        let sio = Sio::new(pac.SIO);

        let external_xtal_freq_hz = 12_000_000u32;
        let clocks = init_clocks_and_plls(
            external_xtal_freq_hz,
            pac.XOSC,
            pac.CLOCKS,
            pac.PLL_SYS,
            pac.PLL_USB,
            &mut pac.RESETS,
            &mut watchdog,
        )
        .ok()
        .unwrap();

        let pins = rp_pico::Pins::new(
            pac.IO_BANK0,
            pac.PADS_BANK0,
            sio.gpio_bank0,
            &mut pac.RESETS,
        );

        let led = pins.led.into_push_pull_output();

        // No time sync: the RTC starts from the flash date.
        let start = config::FIRMWARE_START_TIME;
        let mut rtc = RealTimeClock::new(pac.RTC, clocks.rtc_clock, &mut pac.RESETS, to_rtc(&start))
            .ok()
            .unwrap();
        // Fire at second 0 of every minute
        rtc.schedule_alarm(DateTimeFilter::default().second(0));
        rtc.enable_interrupt();

        let sda: Pin<Gpio4, FunctionI2C, PullUp> = pins.gpio4.reconfigure();
        let scl: Pin<Gpio5, FunctionI2C, PullUp> = pins.gpio5.reconfigure();
        let i2c = I2C::i2c0(
            pac.I2C0,
            sda,
            scl,
            400.kHz(),
            &mut pac.RESETS,
            clocks.system_clock.freq(),
        );

        let interface = I2CDisplayInterface::new(i2c);
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        display.init().unwrap();

        let now = rtc.now().ok().map(|dt| from_rtc(&dt)).unwrap_or(start);
        let face = defmt::unwrap!(WatchFace::init(&config::REFERENCE, now));
        defmt::info!(
            "{} v{}.{} by {} ({=[u8]:x}) started at {=u8}:{=u8}",
            config::APP_NAME,
            config::APP_VERSION.0,
            config::APP_VERSION.1,
            config::APP_AUTHOR,
            config::APP_UUID[..],
            now.hour,
            now.minute
        );

        update_display::spawn().ok();

        (
            Shared { face },
            Local { display, led, rtc },
            init::Monotonics(),
        )
    }

    // Sleep between minute ticks
    #[idle]
    fn idle(_: idle::Context) -> ! {
        loop {
            cortex_m::asm::wfi();
        }
    }

    // Hardware Task: RTC alarm, once per minute
    #[task(binds = RTC_IRQ, priority = 1, shared = [face], local = [rtc, led])]
    fn rtc_tick(mut ctx: rtc_tick::Context) {
        ctx.local.rtc.clear_interrupt();
        ctx.local.led.toggle().unwrap();

        let now = match ctx.local.rtc.now() {
            Ok(dt) => from_rtc(&dt),
            Err(_) => {
                defmt::warn!("rtc not running, tick skipped");
                return;
            }
        };

        if ctx.shared.face.lock(|face| face.on_tick(now)).is_ok() {
            update_display::spawn().ok();
        }
    }

    // Software Task: draw dirty zones and push the frame buffer
    #[task(shared = [face], local = [display])]
    fn update_display(mut ctx: update_display::Context) {
        let display = ctx.local.display;

        let drawn = ctx
            .shared
            .face
            .lock(|face| face.draw(&mut GraphicsSurface::new(&mut *display)));

        match drawn {
            Ok(0) => {}
            Ok(zones) => {
                if display.flush().is_err() {
                    defmt::error!("display flush failed");
                } else {
                    defmt::debug!("redrew {=usize} zones", zones);
                }
            }
            Err(_) => defmt::error!("drawing to the frame buffer failed"),
        }
    }

    fn from_rtc(dt: &DateTime) -> BrokenDownTime {
        BrokenDownTime {
            year: dt.year.saturating_sub(1900),
            month: dt.month,
            day: dt.day,
            hour: dt.hour,
            minute: dt.minute,
            second: dt.second,
            weekday: dt.day_of_week as u8,
        }
    }

    fn to_rtc(time: &BrokenDownTime) -> DateTime {
        let day_of_week = match time.weekday {
            0 => DayOfWeek::Sunday,
            1 => DayOfWeek::Monday,
            2 => DayOfWeek::Tuesday,
            3 => DayOfWeek::Wednesday,
            4 => DayOfWeek::Thursday,
            5 => DayOfWeek::Friday,
            _ => DayOfWeek::Saturday,
        };
        DateTime {
            year: time.full_year() as u16,
            month: time.month,
            day: time.day,
            day_of_week,
            hour: time.hour,
            minute: time.minute,
            second: time.second,
        }
    }
}
