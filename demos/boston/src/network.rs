//! Embedded Boston landmark network.
//!
//! Ten landmarks with real coordinates and sixteen walking routes.
//! Durations are in minutes.

use std::io::Cursor;

use anyhow::Result;

use rc_graph::{read_locations_reader, read_routes_reader, RouteGraph};

const LOCATIONS_CSV: &str = "\
name,latitude,longitude
Fenway Park,42.346268,-71.095764
Boston Public Garden,42.3541614,-71.0704078
Old North Church,42.3663277,-71.0544555
Faneuil Hall,42.360031,-71.054749
Boston Common,42.355083,-71.06588
Museum of Fine Arts Boston,42.339359,-71.094292
Symphony Hall,42.342025,-71.085784
Bunker Hill Monument,42.376296,-71.060348
Massachusetts State House,42.3587415,-71.0638745
Boston Tea Party Ships & Museum,42.352231,-71.051626
";

const ROUTES_CSV: &str = "\
start,end,duration
Fenway Park,Museum of Fine Arts Boston,9
Fenway Park,Symphony Hall,14
Fenway Park,Boston Public Garden,30
Museum of Fine Arts Boston,Symphony Hall,8
Symphony Hall,Boston Public Garden,22
Symphony Hall,Boston Common,25
Boston Public Garden,Boston Common,5
Boston Public Garden,Massachusetts State House,12
Boston Common,Massachusetts State House,4
Boston Common,Boston Tea Party Ships & Museum,16
Massachusetts State House,Faneuil Hall,9
Faneuil Hall,Old North Church,10
Faneuil Hall,Boston Tea Party Ships & Museum,13
Old North Church,Bunker Hill Monument,15
Massachusetts State House,Old North Church,18
Bunker Hill Monument,Faneuil Hall,24
";

pub fn build_network() -> Result<RouteGraph> {
    let locations = read_locations_reader(Cursor::new(LOCATIONS_CSV))?;
    let graph = read_routes_reader(Cursor::new(ROUTES_CSV), &locations)?;
    Ok(graph)
}
