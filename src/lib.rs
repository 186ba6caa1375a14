pub mod configuration;

pub mod holiday {
    pub mod holiday;
    pub mod loaderror;
    pub mod holidayloader;
    pub mod yearfilter;
}

pub mod time {
    pub mod calendarday;
    pub mod utility;
    pub mod dateparser;
    pub mod festivus;
}
