//! nom grammar for the subset of CSS grid values the taffy bridge understands
//!
//! Supported: `px`, `%`, `fr`, unitless `0`, `auto`, `min-content`,
//! `max-content`, `minmax()`, `fit-content()`, `repeat()` and `none`. Line
//! names, `calc()` and font-relative units are not; callers treat a failed
//! parse as "use the engine default".

use nom::branch::alt;
use nom::bytes::complete::{tag, tag_no_case};
use nom::character::complete::{char, multispace0, multispace1};
use nom::combinator::{all_consuming, map, map_opt, opt, value, verify};
use nom::error::{Error, ErrorKind};
use nom::multi::separated_list1;
use nom::number::complete::float;
use nom::sequence::{delimited, preceded, separated_pair};
use nom::{IResult, Parser};

use crate::tracks::track_count;

/// One track breadth. Percentages are stored as fractions (`50%` is `0.5`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Breadth {
    Length(f32),
    Percent(f32),
    Fr(f32),
    Auto,
    MinContent,
    MaxContent,
}

impl Breadth {
    fn is_length_percentage(&self) -> bool {
        matches!(self, Breadth::Length(_) | Breadth::Percent(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Track {
    Single(Breadth),
    MinMax(Breadth, Breadth),
    FitContent(Breadth),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum RepeatCount {
    Count(u16),
    AutoFit,
    AutoFill,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Component {
    Track(Track),
    Repeat(RepeatCount, Vec<Track>),
}

/// Parse a full `grid-template-*` value. `none` yields no components.
pub(crate) fn template(input: &str) -> Option<Vec<Component>> {
    let parsed: IResult<&str, Vec<Component>> = all_consuming(delimited(
        multispace0,
        alt((
            value(Vec::new(), tag_no_case("none")),
            separated_list1(multispace1, component),
        )),
        multispace0,
    ))
    .parse(input);
    parsed.ok().map(|(_, components)| components)
}

/// Parse a space-separated list of plain tracks (as in `grid-auto-rows`)
pub(crate) fn track_list(input: &str) -> Option<Vec<Track>> {
    let parsed: IResult<&str, Vec<Track>> =
        all_consuming(delimited(multispace0, tracks, multispace0)).parse(input);
    parsed.ok().map(|(_, tracks)| tracks)
}

/// Parse a single track size
pub(crate) fn single_track(input: &str) -> Option<Track> {
    let parsed: IResult<&str, Track> =
        all_consuming(delimited(multispace0, track, multispace0)).parse(input);
    parsed.ok().map(|(_, track)| track)
}

/// Parse a single breadth (a bound of `minmax()`)
pub(crate) fn single_breadth(input: &str) -> Option<Breadth> {
    let parsed: IResult<&str, Breadth> =
        all_consuming(delimited(multispace0, breadth, multispace0)).parse(input);
    parsed.ok().map(|(_, breadth)| breadth)
}

/// Parse a `gap` value: one or two length-percentages, returned as `(row, column)`
pub(crate) fn gap(input: &str) -> Option<(Breadth, Breadth)> {
    let parsed: IResult<&str, (Breadth, Option<Breadth>)> = all_consuming(delimited(
        multispace0,
        (
            length_percentage,
            opt(preceded(multispace1, length_percentage)),
        ),
        multispace0,
    ))
    .parse(input);
    let (_, (row, column)) = parsed.ok()?;
    Some((row, column.unwrap_or(row)))
}

/// Parse an `aspect-ratio` value: `<number>` or `<number> / <number>`
pub(crate) fn ratio(input: &str) -> Option<f32> {
    let parsed: IResult<&str, (f32, Option<f32>)> = all_consuming(delimited(
        multispace0,
        (
            number,
            opt(preceded(
                delimited(multispace0, char('/'), multispace0),
                number,
            )),
        ),
        multispace0,
    ))
    .parse(input);
    let (_, (width, height)) = parsed.ok()?;
    let ratio = match height {
        Some(height) => width / height,
        None => width,
    };
    (ratio.is_finite() && ratio > 0.0).then_some(ratio)
}

/// A finite number. `float` alone also accepts `inf` and `nan`.
fn number(input: &str) -> IResult<&str, f32> {
    let (rest, amount) = float(input)?;
    if !amount.is_finite() {
        return Err(nom::Err::Error(Error::new(input, ErrorKind::Float)));
    }
    Ok((rest, amount))
}

fn comma(input: &str) -> IResult<&str, char> {
    delimited(multispace0, char(','), multispace0).parse(input)
}

fn unit(input: &str) -> IResult<&str, &str> {
    alt((tag_no_case("px"), tag_no_case("fr"), tag("%"))).parse(input)
}

/// `name(` with optional whitespace after the parenthesis
fn open_call<'a>(name: &'static str, input: &'a str) -> IResult<&'a str, ()> {
    value((), (tag_no_case(name), char('('), multispace0)).parse(input)
}

fn close_call(input: &str) -> IResult<&str, char> {
    preceded(multispace0, char(')')).parse(input)
}

fn dimension(input: &str) -> IResult<&str, Breadth> {
    let (rest, amount) = number(input)?;
    let (rest, suffix) = opt(unit).parse(rest)?;

    let breadth = match suffix.map(str::to_ascii_lowercase).as_deref() {
        Some("px") => Breadth::Length(amount),
        Some("fr") => Breadth::Fr(amount),
        Some("%") => Breadth::Percent(amount / 100.0),
        None if amount == 0.0 => Breadth::Length(0.0),
        _ => return Err(nom::Err::Error(Error::new(input, ErrorKind::Verify))),
    };
    Ok((rest, breadth))
}

fn keyword(input: &str) -> IResult<&str, Breadth> {
    alt((
        value(Breadth::MinContent, tag_no_case("min-content")),
        value(Breadth::MaxContent, tag_no_case("max-content")),
        value(Breadth::Auto, tag_no_case("auto")),
    ))
    .parse(input)
}

fn breadth(input: &str) -> IResult<&str, Breadth> {
    alt((keyword, dimension)).parse(input)
}

fn length_percentage(input: &str) -> IResult<&str, Breadth> {
    verify(dimension, |breadth: &Breadth| breadth.is_length_percentage()).parse(input)
}

fn minmax(input: &str) -> IResult<&str, Track> {
    let (rest, _) = open_call("minmax", input)?;
    let (rest, (min, max)) = separated_pair(breadth, comma, breadth).parse(rest)?;
    let (rest, _) = close_call(rest)?;
    Ok((rest, Track::MinMax(min, max)))
}

fn fit_content(input: &str) -> IResult<&str, Track> {
    let (rest, _) = open_call("fit-content", input)?;
    let (rest, limit) = length_percentage(rest)?;
    let (rest, _) = close_call(rest)?;
    Ok((rest, Track::FitContent(limit)))
}

fn track(input: &str) -> IResult<&str, Track> {
    alt((minmax, fit_content, map(breadth, Track::Single))).parse(input)
}

fn tracks(input: &str) -> IResult<&str, Vec<Track>> {
    separated_list1(multispace1, track).parse(input)
}

fn repeat_count(input: &str) -> IResult<&str, RepeatCount> {
    alt((
        value(RepeatCount::AutoFill, tag_no_case("auto-fill")),
        value(RepeatCount::AutoFit, tag_no_case("auto-fit")),
        map_opt(number, |count| track_count(count as f64).map(RepeatCount::Count)),
    ))
    .parse(input)
}

fn repeat(input: &str) -> IResult<&str, Component> {
    let (rest, _) = open_call("repeat", input)?;
    let (rest, (count, tracks)) = separated_pair(repeat_count, comma, tracks).parse(rest)?;
    let (rest, _) = close_call(rest)?;
    Ok((rest, Component::Repeat(count, tracks)))
}

fn component(input: &str) -> IResult<&str, Component> {
    alt((repeat, map(track, Component::Track))).parse(input)
}
