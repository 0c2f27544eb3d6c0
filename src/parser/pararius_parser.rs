// Pararius-specific HTML parsing
use crate::model::{Listing, ParserError, NO_LINK};
use crate::normalizer::normalize_text;
use scraper::{ElementRef, Html, Selector};

pub trait Parser {
    fn parse(&self, html: &str) -> Result<Vec<Listing>, ParserError>;
}

const ITEM: &str = "li.search-list__item--listing";
const ANCHOR: &str = "a";
const TITLE: &str = ".listing-search-item__title";
const LOCATION: &str = ".listing-search-item__sub-title";
const PRICE: &str = ".listing-search-item__price";
const ROOMS: &str = ".illustrated-features__item--number-of-rooms";
const AREA: &str = ".illustrated-features__item--surface-area";

pub struct ParariusParser {
    item: Selector,
    anchor: Selector,
    title: Selector,
    location: Selector,
    price: Selector,
    rooms: Selector,
    area: Selector,
}

fn selector(css: &str) -> Result<Selector, ParserError> {
    Selector::parse(css).map_err(|_| ParserError::Selector(css.to_string()))
}

impl ParariusParser {
    pub fn new() -> Result<Self, ParserError> {
        Ok(Self {
            item: selector(ITEM)?,
            anchor: selector(ANCHOR)?,
            title: selector(TITLE)?,
            location: selector(LOCATION)?,
            price: selector(PRICE)?,
            rooms: selector(ROOMS)?,
            area: selector(AREA)?,
        })
    }

    fn text(&self, element: &ElementRef, sel: &Selector) -> Option<String> {
        element
            .select(sel)
            .next()
            .map(|node| normalize_text(node.text()))
            .filter(|text| !text.is_empty())
    }

    /// Fields that are absent keep the sentinel set by `Listing::with_href`.
    fn listing(&self, element: &ElementRef) -> Listing {
        let mut listing = Listing::with_href(self.href(element));
        if let Some(title) = self.text(element, &self.title) {
            listing.title = title;
        }
        if let Some(location) = self.text(element, &self.location) {
            listing.location = location;
        }
        if let Some(price) = self.text(element, &self.price) {
            listing.price = price;
        }
        if let Some(rooms) = self.text(element, &self.rooms) {
            listing.rooms = rooms;
        }
        if let Some(area) = self.text(element, &self.area) {
            listing.area = area;
        }
        listing
    }

    fn href(&self, element: &ElementRef) -> String {
        element
            .select(&self.anchor)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(str::trim)
            .filter(|href| !href.is_empty())
            .unwrap_or(NO_LINK)
            .to_string()
    }
}

impl Parser for ParariusParser {
    fn parse(&self, html: &str) -> Result<Vec<Listing>, ParserError> {
        let document = Html::parse_document(html);

        let listings = document
            .select(&self.item)
            .map(|element| self.listing(&element))
            .collect();

        Ok(listings)
    }
}
