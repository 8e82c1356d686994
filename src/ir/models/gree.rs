//! GREE units paired with the YB0FB2 remote.

use super::ModelCodes;

pub(super) const CODES: ModelCodes = ModelCodes {
    name: "GREE Thermostat",
    min_temperature: 16,
    max_temperature: 30,
    off: "JgCSAAABJZMVNhUSFRMVEhU2FTYVEhYSFRIVEhYSFTYVEhUSFhIVEhUSFhIVEhUSFRMVNhUSFRIVExUSFRIVEhY2FRIVNhUSFhIVNhUSFQACjRYSFRIVEhYSFRIVEhUTFRIVNhUSFhIVEhUSFTYWEhUSFRIWEhUSFRIVEhYSFRIVEhYSFRIVEhYSFTYVEhU2FRMVAA0FAAAAAAAA",
    heat: &[
        /* 16 */ "JgCSAAABJpMVEhUSFjUWNhUSFRIVExUSFRIVEhYSFRIVEhYSFRIVEhYSFRIVEhUTFRIVNhUSFhIVEhUSFRMVEhU2FRIWNRYSFRIVNhUSFgACjRUSFRIWEhYRFRIWEhUSFRIWEhUSFRIVExUSFTYVEhYSFRIVEhUTFRIVEhUSFhIVEhUSFhIVEhUSFhIVEhYRFjUWAA0FAAAAAAAA",
        /* 17 */ "JgCSAAABJpIVEhYSFTYVNhUSFhIVEhUSFjUWEhUSFRIWEhUSFRIWEhUSFRIVExUSFRIVNhYSFRIVEhUTFRIVEhU2FRMVNhUSFRIWNRYSFQACjRUSFhIVEhUSFhIVEhUSFhIVEhUSFRMVEhUSFTYWEhUSFRIVExUSFRIVEhYSFRIVEhYSFRIVEhYSFTYVEhUSFjYVAA0FAAAAAAAA",
        /* 18 */ "JgCSAAABJZMVEhUTFTYVNhUSFRIWEhUSFRIWNRYSFRIVEhYSFRIVEhYSFRIVEhYSFRIVNhUSFhIVEhUSFhIVEhU2FRIWNRYSFRIVNhUSFgACjRUSFRIWEhUSFRIWEhUSFRIWEhUSFRIWEhUSFTYVEhYSFRIVEhYSFRIVEhUTFRIVEhUSFhIVEhUSFhIVNhUSFTYWAA0FAAAAAAAA",
        /* 19 */ "JgCSAAABJpIVEhYSFTYVNhUSFRMVEhUSFTYWNRYSFRIVEhYSFRIVEhYSFRIVEhUTFhEVNhUSFhIVEhUSFRMVEhU2FRIWNRYSFRIVNhUSFgACjRUSFRIWEhUSFRIWEhUSFRIWEhUSFRIWEhUSFTYVEhYSFRIVEhYSFRIVEhUTFRIVEhUSFhIVEhUSFjUWNhUSFTQXAA0FAAAAAAAA",
        /* 20 */ "JgCSAAABJpIWEhUSFTYVNhUSFhIVEhUSFhIVEhU2FRIWEhUSFRIWEhUSFRIWEhUSFRIWNRYSFRIVEhYSFRIVEhY1FhIVNhUSFRIWNhUSFQACjRUTFRIVEhUSFhIVEhUSFhIVEhUSFhIVEhUSFjUWEhUSFRIWEhUSFRIWEhUSFRIVExUSFRIVEhYSFRIVEhY1FjYVAA0FAAAAAAAA",
        /* 21 */ "JgCSAAABJpIVExUSFTYVNhUSFhIVEhUSFjUWEhU2FRIVExUSFRIVEhYSFRIVEhYSFRIVNhUSFhIVEhUSFhIVEhU2FRIWNhUSFRIVNhYSFQACjRUSFhIVEhUSFRMVEhUSFRIWEhUSFRIWEhUSFTYVEhYSFRIVEhYSFRIVEhYSFRIVEhYSFRIVEhUSFjYVEhU2FTYVAA0FAAAAAAAA",
        /* 22 */ "JgCSAAABJ5EXERcQFzQXNBcRFhEXNBcRFhEWNRc0FxAXERYRFxAXERYRFxAXERYRFhEXNBcRFhEWERcRFhEWERc0FxEWNRYRFxAXNBcRFgACjBcQFxEWERYRFzQXERYRFxAXERYRFhEXERYRFjUWERcRFhEWERcRFhEWERcRFhEWERcRFhEWERcQFzUWNRY1FjUWAA0FAAAAAAAA",
        /* 23 */ "JgCSAAABJ5IWERYRFzQXNRYRFhEXERYRFjUWNRY1FxEWERYRFxAXERYRFxAXERYRFhEXNBcRFhEXEBcRFhEWERc0FxEWNRYRFxEWNRYRFgACjBcRFhEWERcRFhEWERcRFhEWERcQFxEWERYRFzQXERYRFxAXERYRFhEXERYRFhEXERYRFhEXERYRFjUWNRc0FzQXAA0FAAAAAAAA",
        /* 24 */ "JgCSAAABJpMVEhUSFjUWNhUSFRIVEhYSFRIVEhYSFjUVEhUSFhIVEhUSFhIVEhUSFhIVNhUSFRIWEhUSFRIWEhU2FRIVNhUTFRIVNhUSFQACjhUSFRIWEhUSFRIVExUSFRIVEhYSFRIVEhYSFTYVEhUSFhIVEhUSFhIVEhUSFhIVEhUSFRMVEhUSFRIWEhUSFRIWAA0FAAAAAAAA",
        /* 25 */ "JgCSAAABJ5EXERYRFzQXNBcRFhEWERcRFhEWERcRFjUWERYRFxEWERYRFxEWERYRFxEWNRYRFhEXERYRFhEXERY1FhEWNRYRFxEWNRYRFwACixcRFhEXEBcRFhEWERcRFhEWERcRFhEWERcRFjUWERYRFxEWERYRFxEWERYRFxAXERYRFhEXERYRFhEXERYRFhEXAA0FAAAAAAAA",
        /* 26 */ "JgCSAAABKJAXERcQFzQXNBcRFhEXEBcRFhEXNBcQFzQXERcQFxAXERYRFxAXERYRFxAXNBcRFhEXEBcRFhEXEBc0FxEWNRcQFxEWNRYRFwACixcRFhEXEBcRFhEXEBcRFhEWERcQFxEWERcQFzQXERYRFxAXERYRFxAXERYRFxAXERYRFxAXERYRFxAXNBcRFhEXAA0FAAAAAAAA",
        /* 27 */ "JgCSAAABJpIVEhYSFTYVNhUSFRIWEhUSFTYVNhYSFTYWERUSFhIVEhUSFhIVEhUSFhIVNhUSFRIWEhUSFRIWEhU2FRIVNhUSFhIVNhUSFQACjhUSFRIVExUSFRIVEhYSFRIVEhYSFRIVEhYSFTYVEhUSFhIVEhUSFhIVEhUSFRMVEhUSFRMVEhUSFTYVNhYSFRIVAA0FAAAAAAAA",
        /* 28 */ "JgCSAAABJpIVEhYSFTYVNhUSFhIVEhUSFhIVEhU2FTYVEhYSFRIVEhcRFRIVEhYSFRIVNhUSFhIVEhUSFhIVEhU2FRIWNhUSFRIVNhYSFQACjRUSFhIVEhUSFRIWEhUSFRIWEhUSFRIXERUSFjUVEhYSFRIVEhYSFRIVEhYSFRIVEhUTFRIVEhUSFhIVEhU2FRMVAA0FAAAAAAAA",
        /* 29 */ "JgCSAAABJpIWEhUSFTYVNhYSFRIVEhYSFTYVEhU2FTYWEhUSFRIVExUSFRIVExUSFRIVNhUTFRIWERUSFhIVEhU2FRMVNhUSFRIWNRYSFQACjRUSFhIVEhUSFhIVEhUSFhIVEhUSFRMVEhUSFTYWEhUSFRIVExUSFRIVEhYSFRIVEhcRFRIVEhYSFTYVEhU2FRMVAA0FAAAAAAAA",
        /* 30 */ "JgCSAAABJ5IVEhYRFzQXNBcRFRIWERYSFRIVNhU2FTYWEhUSFRIXERUSFRIXERUSFhEVNhUTFhEWERcQFhIWERY1FRMVNhUSFRIWNRYSFgACjBUSFhIWERUSFxEVEhYRFhIVEhYRFRMVEhUSFzQWEhUSFhEVExUSFRIXEBcRFhEWERYSFRIVEhYSFRIWNRU2FhEXAA0FAAAAAAAA",
    ],
    cool: &[
        /* 16 */ "JgCSAAABJpMVNhUSFhIVNhUSFTYVEhYSFRIVEhYSFRIVEhYSFRIVEhYSFRIVEhUTFRIVNhUSFhIVEhUSFRIWEhU2FRIWNRYSFRIVNhUSFgACjRU2FTYVEhYSFRIVEhYSFRIVEhYSFRIVEhUTFTYVEhUSFhIVEhUSFRMVEhUSFRIWEhUSFRIWEhUSFTYVEhY2FRIVAA0FAAAAAAAA",
        /* 17 */ "JgCSAAABJpIVNhYSFRIVNhUSFjUWEhUSFTYVExUSFRIVEhYSFRIVEhYSFRIVEhYSFRIVNhUSFhIVEhUSFhIVEhU2FRIWNhUSFRIVNhUTFQACjRU2FTYVEhYSFRIVEhYSFRIVEhYSFRIVEhYSFTYVEhUSFhIVEhUSFhIVEhUSFRMVEhUSFRMVEhUSFRIWNhU2FRIVAA0FAAAAAAAA",
        /* 18 */ "JgCSAAABJpIWNhUSFRIVNhUSFjYVEhUSFhIVNhUSFRIWEhUSFRIVExUSFRIVExUSFRIVNhUTFRIVEhUSFhIVEhU2FRMVNhUSFRIWNRYSFQACjRU2FTYWEhUSFRIWEhUSFRIVExUSFRIVEhcRFTYVEhUTFRIVEhUTFRIVEhUSFhIVEhUSFhIVEhUSFjUWNhU2FRIVAA0FAAAAAAAA",
        /* 19 */ "JgCSAAABJpIVNhUTFRIVNhUSFjUWEhUSFTYVNhYSFRIVEhUTFRIVEhUSFhIVEhUSFhIVNhUSFRIWEhUSFRIWEhU2FRIVNhYSFRIVNhUSFgACjRU2FTYVEhYSFRIVEhUTFRIVEhUSFhIVEhUSFjYVEhUSFRIWEhUSFRIWEhUSFRIWEhUSFRIWEhUSFRIVExUSFTYVAA0FAAAAAAAA",
        /* 20 */ "JgCSAAABJpIVNhYSFRIVNBcSFjYVEhUSFRIWEhU2FRIVExUSFRIVEhYSFRIVEhYSFRIVNhUSFhIVEhUSFhIVEhU2FRIWNhUSFRIVNhYSFQACjRU2FTYWEhUSFRIVExUSFRIVEhYSFRIVEhYSFTYVEhUTFRIVEhUSFhIVEhUSFhIVEhUSFhIVEhUSFTYWEhUSFTYVAA0FAAAAAAAA",
        /* 21 */ "JgCSAAABJpEWNhUSFhIVNhUSFTYWEhUSFTYVEhY2FRIVEhUSFhIVEhUSFhIVEhUSFhIVNhUSFRIWEhUSFRIWEhU2FRIVNhUTFRIVNhUSFgACjRU2FTYVEhUTFRIVEhUSFhIVEhUSFhIVEhUSFjYVEhUSFRIWEhUSFRIWEhUSFRIWEhUSFRIVExUSFRIVNhYSFTYVAA0FAAAAAAAA",
        /* 22 */ "JgCSAAABJZMVNhUSFhIVNhUSFTYWEhUSFRIVNhY1FhIVEhUSFhIVEhUSFhIVEhUSFhIVNhUSFRIWEhUSFRIWEhU2FRIVNhUSFhIVNhUSFQACjhU2FTYVEhUSFhIVEhUSFhIVEhUSFhIVEhUSFjUWEhUSFRIWEhUSFRIWEhUSFRIVExUSFRIVEhYSFTYVNhUSFjUWAA0FAAAAAAAA",
        /* 23 */ "JgCSAAABJZMVNhUSFhIVNhUSFTYWEhUSFTYVNhU2FhIVEhUSFRMVEhUSFRIWEhUSFRIWNhUSFRIVEhYSFRIVEhY2FRIVNhUSFhIVNhUSFQACjRY2FTYVEhUSFhIVEhUSFRMVEhUSFRMVEhUSFTYVExUSFRIVExUSFRIVEhYSFRIVEhYSFRIVEhYSFRIVEhU2FjYVAA0FAAAAAAAA",
        /* 24 */ "JgCSAAABJpMVNhUSFRIWNhUSFTYVEhYSFRIVEhYSFTYVEhUSFhIVEhUSFRMVEhUSFRIWNhUSFRIVExUSFRIVEhY2FRIVNhUSFhIVNhUSFQACjRY2FTYVEhUSFhIVEhUSFhIVEhUSFhIVEhUSFTYWEhUSFRIVExUSFRIVEhYSFRIVEhYSFRIVEhYSFTYVEhU2FTYWAA0FAAAAAAAA",
        /* 25 */ "JgCSAAABJpIVNhYSFRIVNhUSFjUWEhUSFTYVEhYSFTYVEhYSFRIVEhUSFhIVEhUSFhIVNhUSFRMVEhUSFRIWEhU2FRIVNhYSFRIVNhUSFgACjRU2FTYVEhYSFRIVEhYSFRIVEhUTFRIVEhUSFjYVEhUSFRMVEhUSFRIWEhUSFRIWEhUSFRIWEhUSFRIWNRY2FTYVAA0FAAAAAAAA",
        /* 26 */ "JgCSAAABJpIWNRYSFRIVNhUSFjYVEhUSFRMVNhUSFTYVEhYSFRIVEhYSFRIVEhUTFRIVNhUSFhIVEhUSFhIVEhU2FRIWNRYSFRIVNhUTFQACjRU2FTYVEhYSFRIVEhYSFRIVEhYSFRIVEhYSFTYVEhUSFhIVEhUSFhIVEhUSFRMVEhUSFRIWEhUSFTYVNhY1FjYVAA0FAAAAAAAA",
        /* 27 */ "JgCSAAABJZMVNxQTFBMVNhUTFDcUExQTFTYVNxQTFDcUExUTFBMUExUTFBMUExUTFBMUNxQTFRMUExQTFRMUExQ3FBMVNhUTFBMUNxQUFAACjhQ3FDcUExUTFBMUExUTFBMUExUTFBMUExUTFDcUExQTFRMUExQTFRMUExQTFBQUExQTFBMVExQTFBMVExQTFBMVAA0FAAAAAAAA",
        /* 28 */ "JgCSAAABJZMUNxUTFBMUNxQTFTYVExQTFBMVExQ3FDcUExUTFBMUExUTFBMUExQUFBMUNxQTFRMUExQTFBMVExQ3FBMVNhUTFBMUNxQTFQACjhQ3FDcUExUTFBMUExUTFBMUExQUFBMUExQTFTcUExQTFBMVExQTFBMVExQTFBMVExQTFBMVExQTFDcUExUTFBMUAA0FAAAAAAAA",
        /* 29 */ "JgCSAAABJpIUNxUTFBMUNxQTFTYVExQTFDcUExU3FDcUExQTFRMUExQTFRMWERQTFBMWNhQTFBMWEhYRFhEWERc1FBMWNRQTFRMWNRYRFgACjRQ3FDcWERYRFhIWERQTFhIWERYRFhIWERYRFjUWEhYRFhEWEhYRFhEWERcRFhEWERYSFhEWEhUSFhEWNRYRFhIWAA0FAAAAAAAA",
        /* 30 */ "JgCSAAABJZMUNxUTFBMUNxQTFTYVExQTFBMVNxQ3FDcUExQTFRMUExQTFRMUExQTFRMUNxQTFBQUExQTFBMVExQ3FBMUNxQTFRMUNxQTFAACjhU3FDcUExQTFRMUExQTFRMUExQTFRMUExQTFTYVExQTFBMVExQTFBMUExUTFBMUExUTFBMUExUTFDcUNxQTFRMUAA0FAAAAAAAA",
    ],
};
