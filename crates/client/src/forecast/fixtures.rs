//! Canned provider pages for tests.
//!
//! The markup mirrors the provider's homepage layout closely enough for the fixed
//! paths in `layout` to resolve, including the chrome slot ahead of the entries and
//! the whitespace text nodes a real page carries.

/// (hour label, month/day, temperature, precip) per hourly slot.
pub type HourlyRow<'a> = (&'a str, &'a str, &'a str, &'a str);

/// (month/day, high, low, precip) per ten-day slot.
pub type TenDayRow<'a> = (&'a str, &'a str, &'a str, &'a str);

pub const HOURLY: &[HourlyRow<'static>] = &[
    ("4 PM", "7/10", "92", "0"),
    ("5 PM", "7/10", "92", "0"),
    ("6 PM", "7/10", "91", "0"),
    ("7 PM", "7/10", "90", "0"),
    ("8 PM", "7/10", "89", "0"),
    ("9 PM", "7/10", "86", "0"),
    ("10 PM", "7/10", "84", "0"),
    ("11 PM", "7/10", "82", "0"),
    ("12 AM", "7/11", "80", "0"),
    ("1 AM", "7/11", "79", "0"),
    ("2 AM", "7/11", "78", "20"),
    ("3 AM", "7/11", "77", "30"),
];

pub const TEN_DAY: &[TenDayRow<'static>] = &[
    ("7/10", "°", "71°", "60%"),
    ("7/11", "86°", "62°", "30%"),
    ("7/12", "87°", "64°", "0%"),
    ("7/13", "90°", "68°", "0%"),
    ("7/14", "92°", "72°", "0%"),
    ("7/15", "95°", "73°", "0%"),
    ("7/16", "95°", "72°", "20%"),
    ("7/17", "94°", "72°", "0%"),
    ("7/18", "94°", "74°", "0%"),
    ("7/19", "96°", "75°", "0%"),
];

fn page(listing: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Weather</title></head>
<body>
<nav><a href="/">Home</a></nav>
<div id="homepage-layout">
  <div>
    <div>
      <div>
        <section>
          <div class="section-title"><h2>Forecast</h2></div>
          <div>
            <div>
              <div class="tabs"><button>Hourly</button><button>10 Day</button></div>
              <div>
                {listing}
              </div>
            </div>
          </div>
        </section>
        <section><div>Radar</div></section>
      </div>
      <div class="sidebar">Ads</div>
    </div>
  </div>
</div>
</body>
</html>
"#
    )
}

/// Hourly page with one entry per row, in slot order.
pub fn hourly_page(rows: &[HourlyRow<'_>]) -> String {
    let entries: String = rows
        .iter()
        .map(|(hour, day, temp, precip)| {
            format!(
                r#"
                  <div class="hourly-entry">
                    <div><span class="hour">{hour}</span> <span class="day">{day}</span></div>
                    <div class="temp">{temp}<span class="deg">°</span></div>
                    <div class="icon"><img src="/icons/clear.svg" alt=""></div>
                    <div class="precip">{precip}<span>%</span></div>
                  </div>"#
            )
        })
        .collect();

    page(&format!(
        r#"<div class="hourly-list">
                  <div class="hourly-header"><span>Time</span><span>Temp</span></div>{entries}
                </div>"#
    ))
}

/// Ten-day page with one entry per row, in slot order.
pub fn ten_day_page(rows: &[TenDayRow<'_>]) -> String {
    let entries: String = rows
        .iter()
        .map(|(day, high, low, precip)| {
            format!(
                r#"
                  <div class="day-entry">
                    <div><span class="dow">Sun</span><span class="sep">|</span><span class="date">{day}</span></div>
                    <div class="temps"><div class="high"><span>{high}</span></div><span class="low">{low}</span></div>
                    <div class="icon"><img src="/icons/storm.svg" alt=""></div>
                    <div class="precip">{precip}</div>
                  </div>"#
            )
        })
        .collect();

    page(&format!(
        r#"<div class="ten-day-list">
                  <div class="ten-day-header"><span>Day</span><span>High/Low</span></div>{entries}
                </div>"#
    ))
}
